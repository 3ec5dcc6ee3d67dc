/// Opaque password hashing capability
///
/// The domain never looks inside a hash: it only asks the hasher to produce one and to compare
/// a plaintext against one.
#[mockall::automock]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> String;
    fn matches(&self, plain: &str, hash: &str) -> bool;
}
