pub mod dto;
pub mod validation;

pub use dto::{CourseDto, CourseQuery, InstructorDto, InstructorQuery, UpdateCourseDto};
pub use validation::{Validate, ValidJson, ValidPath};
