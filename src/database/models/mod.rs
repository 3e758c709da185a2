pub mod course;
pub mod instructor;

pub use course::{Course, NewCourse};
pub use instructor::{Instructor, NewInstructor};
