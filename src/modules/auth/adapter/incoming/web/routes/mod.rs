mod login_admin;
mod session;

pub use login_admin::{
    __path_login_admin_handler, login_admin_handler, LoginRequestDto, LoginResponse,
};
pub use session::{__path_session_handler, session_handler, SessionResponse};
