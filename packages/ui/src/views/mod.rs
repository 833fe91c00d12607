mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod users;
pub use users::UsersView;

mod add_user;
pub use add_user::AddUserView;
