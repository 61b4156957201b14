/// Principal bound to the request after the access gate verifies a token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub id: i32,
}
