mod common;

use candidate_dashboard::dto::candidate_dto::FilterCriteria;
use candidate_dashboard::models::candidate::{CandidateStatus, StatusColor};
use candidate_dashboard::services::dashboard_service::table_view;
use candidate_dashboard::services::filter_service::filter_candidates;
use candidate_dashboard::services::pagination::{self, PAGE_SIZE};
use candidate_dashboard::services::sort_service::{
    sorted, SortDirection, SortKey, SortSpec, SortState,
};
use candidate_dashboard::services::stats_service::CandidateStats;
use candidate_dashboard::utils::time::format_date;
use common::{candidate, date, generate_candidates, sample_candidates};
use std::collections::HashSet;

fn ids(list: &[candidate_dashboard::models::candidate::Candidate]) -> Vec<u64> {
    list.iter().map(|c| c.id).collect()
}

#[test]
fn empty_criteria_is_identity() {
    let all = sample_candidates();
    let out = filter_candidates(&all, &FilterCriteria::default());
    assert_eq!(out, all);

    let blank = FilterCriteria {
        search: Some("   ".to_string()),
        role: Some(String::new()),
        ..Default::default()
    };
    assert!(!blank.is_active());
    assert_eq!(filter_candidates(&all, &blank), all);
}

#[test]
fn criteria_from_query_json_trim_blank_text() {
    let mut criteria: FilterCriteria = serde_json::from_str(
        r#"{"search": "  mary ", "role": "   ", "status": "rejected", "dateFrom": "2024-12-01"}"#,
    )
    .unwrap();

    assert_eq!(criteria.search.as_deref(), Some("mary"));
    assert_eq!(criteria.role, None);
    assert_eq!(criteria.status, Some(CandidateStatus::Rejected));
    assert_eq!(criteria.date_from, Some(date("2024-12-01")));
    assert_eq!(ids(&filter_candidates(&sample_candidates(), &criteria)), vec![2]);

    criteria.clear();
    assert!(!criteria.is_active());
    assert_eq!(criteria, FilterCriteria::default());
}

#[test]
fn blank_status_and_dates_in_query_json_are_no_ops() {
    let criteria: FilterCriteria = serde_json::from_str(
        r#"{"search": "", "status": "", "dateFrom": "", "dateTo": "  "}"#,
    )
    .unwrap();

    assert_eq!(criteria, FilterCriteria::default());
    assert!(!criteria.is_active());
    assert_eq!(filter_candidates(&sample_candidates(), &criteria), sample_candidates());

    let bad = serde_json::from_str::<FilterCriteria>(r#"{"status": "archived"}"#);
    assert!(bad.is_err());
}

#[test]
fn search_matches_name_or_email_case_insensitively() {
    let all = sample_candidates();

    let by_name = FilterCriteria {
        search: Some("MARY".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filter_candidates(&all, &by_name)), vec![2]);

    let by_email = FilterCriteria {
        search: Some("garcia@email".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filter_candidates(&all, &by_email)), vec![6]);
}

#[test]
fn criteria_combine_conjunctively() {
    let all = sample_candidates();
    let criteria = FilterCriteria {
        status: Some(CandidateStatus::Processed),
        role: Some("Frontend Developer".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![6]);

    let by_assignee = FilterCriteria {
        assignee: Some("Bob Wilson".to_string()),
        status: Some(CandidateStatus::New),
        ..Default::default()
    };
    assert_eq!(ids(&filter_candidates(&all, &by_assignee)), vec![5]);
}

#[test]
fn date_range_is_inclusive() {
    let all = sample_candidates();
    let criteria = FilterCriteria {
        date_from: Some(date("2024-12-10")),
        date_to: Some(date("2024-12-15")),
        ..Default::default()
    };
    assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![1, 2, 6]);

    let open_ended = FilterCriteria {
        date_from: Some(date("2024-12-15")),
        ..Default::default()
    };
    assert_eq!(ids(&filter_candidates(&all, &open_ended)), vec![1, 3]);
}

#[test]
fn filter_is_a_subset_and_idempotent() {
    let all = generate_candidates(300, 7);
    let criteria = FilterCriteria {
        search: Some("candidate 1".to_string()),
        status: Some(CandidateStatus::Hired),
        date_from: Some(date("2023-06-01")),
        ..Default::default()
    };

    let once = filter_candidates(&all, &criteria);
    let twice = filter_candidates(&once, &criteria);

    assert_eq!(once, twice);
    let universe: HashSet<_> = all.iter().map(|c| c.id).collect();
    assert!(once.iter().all(|c| universe.contains(&c.id)));
}

#[test]
fn single_status_filters_partition_the_collection() {
    let all = generate_candidates(1000, 42);
    let mut seen = HashSet::new();
    let mut total = 0;

    for status in CandidateStatus::ALL {
        let criteria = FilterCriteria {
            status: Some(status),
            ..Default::default()
        };
        let subset = filter_candidates(&all, &criteria);
        total += subset.len();
        for c in &subset {
            assert!(seen.insert(c.id), "candidate {} matched two statuses", c.id);
        }
    }

    assert_eq!(total, 1000);
}

#[test]
fn three_clicks_return_to_default_from_any_state() {
    let starts = [
        SortState::Unset,
        SortState::Asc(SortKey::Name),
        SortState::Desc(SortKey::Name),
        SortState::Asc(SortKey::Role),
        SortState::Desc(SortKey::Date),
    ];
    for start in starts {
        let mut state = start;
        for _ in 0..3 {
            state = state.click(SortKey::Status);
        }
        assert_eq!(state, SortState::Unset, "start {:?}", start);
        assert_eq!(state.spec(), SortSpec::DEFAULT);
        assert_eq!(state.spec().key, SortKey::Date);
        assert_eq!(state.spec().direction, SortDirection::Desc);
    }
}

#[test]
fn click_cycle_is_asc_desc_unset() {
    let state = SortState::Unset.click(SortKey::Name);
    assert_eq!(state, SortState::Asc(SortKey::Name));
    let state = state.click(SortKey::Name);
    assert_eq!(state, SortState::Desc(SortKey::Name));
    assert_eq!(state.active_column(), Some(SortKey::Name));
    assert_eq!(state.click(SortKey::Role), SortState::Asc(SortKey::Role));
    assert_eq!(state.click(SortKey::Name).active_column(), None);
}

#[test]
fn string_columns_sort_case_insensitively() {
    let all = sample_candidates();
    let spec = SortSpec {
        key: SortKey::Name,
        direction: SortDirection::Asc,
    };
    let names: Vec<_> = sorted(&all, spec).into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "James Smith",
            "John Williams",
            "Linda Garcia",
            "mary johnson",
            "Patricia Brown",
            "Robert Jones",
        ]
    );
}

#[test]
fn equal_keys_keep_input_order_in_both_directions() {
    let all = sample_candidates();
    // Candidates 2 and 6 share 2024-12-10.
    let asc = sorted(
        &all,
        SortSpec {
            key: SortKey::Date,
            direction: SortDirection::Asc,
        },
    );
    assert_eq!(ids(&asc), vec![5, 4, 2, 6, 1, 3]);

    let desc = sorted(&all, SortSpec::DEFAULT);
    assert_eq!(ids(&desc), vec![3, 1, 2, 6, 4, 5]);
}

#[test]
fn resorting_with_same_ordering_is_idempotent() {
    let all = generate_candidates(200, 3);
    for key in [SortKey::Role, SortKey::Date, SortKey::Experience, SortKey::Status] {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let spec = SortSpec { key, direction };
            let once = sorted(&all, spec);
            assert_eq!(sorted(&once, spec), once);
        }
    }
}

#[test]
fn slicing_empty_and_out_of_range_pages() {
    let empty: Vec<u32> = Vec::new();
    let page = pagination::slice(&empty, 1, PAGE_SIZE);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);

    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(pagination::slice(&items, 3, PAGE_SIZE).items, vec![21, 22, 23, 24, 25]);
    assert_eq!(pagination::slice(&items, 3, PAGE_SIZE).total_pages, 3);
    assert!(pagination::slice(&items, 4, PAGE_SIZE).items.is_empty());
    assert!(pagination::slice(&items, 0, PAGE_SIZE).items.is_empty());
    assert_eq!(pagination::total_pages(20, PAGE_SIZE), 2);
}

#[test]
fn table_view_filters_sorts_then_slices() {
    let all = generate_candidates(1000, 11);
    let filters = FilterCriteria {
        status: Some(CandidateStatus::New),
        ..Default::default()
    };
    let spec = SortSpec {
        key: SortKey::Experience,
        direction: SortDirection::Desc,
    };

    let expected_total = all.iter().filter(|c| c.status == CandidateStatus::New).count();
    let first = table_view(&all, &filters, spec, 1);

    assert_eq!(first.total_filtered, expected_total);
    assert_eq!(first.total_pages, expected_total.div_ceil(PAGE_SIZE));
    assert_eq!(first.items.len(), PAGE_SIZE);
    assert!(first.items.iter().all(|c| c.status == CandidateStatus::New));
    assert!(first.items.windows(2).all(|w| w[0].experience >= w[1].experience));

    let beyond = table_view(&all, &filters, spec, first.total_pages + 1);
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_filtered, expected_total);
}

#[test]
fn table_view_of_no_matches_is_empty_not_an_error() {
    let all = sample_candidates();
    let filters = FilterCriteria {
        search: Some("nobody".to_string()),
        ..Default::default()
    };
    let view = table_view(&all, &filters, SortSpec::DEFAULT, 1);
    assert!(view.items.is_empty());
    assert_eq!(view.total_filtered, 0);
    assert_eq!(view.total_pages, 0);
}

#[test]
fn stats_count_each_status() {
    let list = vec![
        candidate(1, "A", CandidateStatus::Hired, "2024-12-15"),
        candidate(2, "B", CandidateStatus::Rejected, "2024-12-10"),
        candidate(3, "C", CandidateStatus::New, "2024-12-18"),
        candidate(4, "D", CandidateStatus::Processed, "2024-12-05"),
    ];
    let stats = CandidateStats::from_candidates(&list, date("2024-12-20"));

    assert_eq!(stats.total, 4);
    assert_eq!(stats.hired, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.new, 1);
    assert_eq!(stats.processed, 1);
    assert_eq!(stats.applied_this_week, 2);
    assert_eq!(stats.count_for(CandidateStatus::Hired), 1);

    assert_eq!(CandidateStats::from_candidates(&[], date("2024-12-20")), CandidateStats::default());
}

#[test]
fn dates_format_for_display() {
    assert_eq!(format_date("2024-01-15"), "Jan 15, 2024");
    assert_eq!(format_date("2024-12-25T10:30:00Z"), "Dec 25, 2024");
}

#[test]
fn status_colors() {
    assert_eq!(CandidateStatus::New.color(), StatusColor::Info);
    assert_eq!(CandidateStatus::Processed.color(), StatusColor::Warning);
    assert_eq!(CandidateStatus::Rejected.color(), StatusColor::Error);
    assert_eq!(CandidateStatus::Hired.color(), StatusColor::Success);
    assert_eq!(StatusColor::for_status("unknown"), StatusColor::Default);
    assert_eq!(StatusColor::for_status("HIRED").as_str(), "success");
}
