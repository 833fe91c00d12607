mod users;
pub use users::Users;

mod add_user;
pub use add_user::AddUser;
