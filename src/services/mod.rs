mod activities_api;
mod board_controller;

pub use activities_api::{ActivitiesApi, ApiError, HttpActivitiesApi, MockActivitiesApi};
pub use board_controller::{ActionReport, BoardController, Notice, NoticeKind, GENERIC_FAILURE};
