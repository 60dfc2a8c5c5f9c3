use crate::error::Result;
use crate::model::{Course, Student, Teacher};
use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

/// Teachers with their courses and enrolled students, in one round-trip.
///
/// Outer joins keep teachers without courses and courses without students.
pub const ROSTER_QUERY: &str = r#"
SELECT
    t.id   AS teacher_id,
    t.name AS teacher_name,
    c.id   AS course_id,
    c.name AS course_name,
    s.id   AS student_id,
    s.name AS student_name
FROM teachers t
LEFT JOIN courses c ON c.teacher_id = t.id
LEFT JOIN enrollments e ON e.course_id = c.id
LEFT JOIN students s ON s.id = e.student_id
ORDER BY t.id, c.id, s.id
"#;

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct RosterRow {
    pub teacher_id: i32,
    pub teacher_name: String,
    pub course_id: Option<i32>,
    pub course_name: Option<String>,
    pub student_id: Option<i32>,
    pub student_name: Option<String>,
}

pub async fn load_roster<C: ConnectionTrait>(conn: &C) -> Result<Vec<Teacher>> {
    let statement = Statement::from_string(conn.get_database_backend(), ROSTER_QUERY);
    let rows = RosterRow::find_by_statement(statement).all(conn).await?;
    let row_count = rows.len();
    let teachers = fold_rows(rows);
    tracing::debug!(rows = row_count, teachers = teachers.len(), "Roster loaded");
    Ok(teachers)
}

/// Nest flat join rows. Rows must arrive grouped by teacher, then course.
pub fn fold_rows(rows: impl IntoIterator<Item = RosterRow>) -> Vec<Teacher> {
    let mut teachers: Vec<Teacher> = Vec::new();

    for row in rows {
        if teachers.last().is_none_or(|t| t.id != row.teacher_id) {
            teachers.push(Teacher::new(row.teacher_id, row.teacher_name));
        }
        let last = teachers.len() - 1;
        let teacher = &mut teachers[last];

        let (Some(course_id), Some(course_name)) = (row.course_id, row.course_name) else {
            continue;
        };
        if teacher.courses.last().is_none_or(|c| c.id != course_id) {
            teacher
                .courses
                .push(Course::new(course_id, course_name, teacher.id));
        }
        let last = teacher.courses.len() - 1;
        let course = &mut teacher.courses[last];

        if let (Some(student_id), Some(student_name)) = (row.student_id, row.student_name) {
            course.students.push(Student::new(student_id, student_name));
        }
    }

    teachers
}
