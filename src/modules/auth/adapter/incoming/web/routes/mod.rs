pub mod login;
pub mod logout;
pub mod session;

pub use login::{login_handler, LoginRequestDto};
pub use logout::{logout_handler, LogoutResponseBody};
pub use session::{session_handler, session_stream_handler};
