//! User-facing strings for the detail page.

pub const LOGIN_REQUIRED: &str = "로그인이 필요합니다.";

pub const LEAVE_FAILED: &str = "모임 탈퇴에 실패했습니다.";
pub const LEAVE_ERROR: &str = "모임 탈퇴 중 오류가 발생했습니다.";

pub const DELETE_FAILED: &str = "모임 삭제에 실패했습니다.";
pub const DELETE_ERROR: &str = "모임 삭제 중 오류가 발생했습니다.";
pub const DELETE_UNAVAILABLE: &str = "지금은 모임을 삭제할 수 없습니다.";

pub const GROUP_LOAD_FAILED: &str = "모임 정보를 불러오지 못했습니다.";

pub const NO_POSTS: &str = "게시물이 없습니다.";

pub const DELETE_CONFIRM_TITLE: &str = "모임 삭제";
pub const DELETE_CONFIRM_BODY: &str = "정말로 이 모임을 삭제하시겠습니까? 삭제된 모임은 복구할 수 없습니다.";
