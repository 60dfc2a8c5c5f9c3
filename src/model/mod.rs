//! Read-only projections of the school roster.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub teacher_id: i32,
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
}

impl Teacher {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
        }
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Enrolled students across all courses, counting a student once per course.
    pub fn enrollment_count(&self) -> usize {
        self.courses.iter().map(|c| c.students.len()).sum()
    }
}

impl Course {
    pub fn new(id: i32, name: impl Into<String>, teacher_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            teacher_id,
            students: Vec::new(),
        }
    }

    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }
}

impl Student {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
