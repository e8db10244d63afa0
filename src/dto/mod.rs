pub mod candidate_dto;
pub mod status_dto;
