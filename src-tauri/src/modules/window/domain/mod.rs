// Window Domain Layer
//
// 窗口管理领域层

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
