pub mod database {
    pub mod memory;
}
pub mod email {
    pub mod logging;
}
pub mod password {
    pub mod sha256;
}
