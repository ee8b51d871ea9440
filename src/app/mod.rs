//! Application use cases.

mod student;

pub use crate::domain::student::{Student, StudentCreateReq, StudentUpdateReq};
pub use student::{
    student_count, student_create, student_delete, student_get, student_list,
    student_search_by_name, student_update,
};
