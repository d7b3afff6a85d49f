pub mod numerical;
pub mod symbolic;
