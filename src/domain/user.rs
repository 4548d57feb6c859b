/// Registration input after password hashing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub hashed_password: String,
}
