//! 사용자 요청 DTO 모듈

pub mod create_user_request;

pub use create_user_request::{CreateUserRequest, ModifyUserNameRequest, UserListQuery, UserSliceQuery};
