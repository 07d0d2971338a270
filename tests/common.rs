use matriculas_admin::models::*;

pub fn get_seed_student_0() -> Student {
    Student {
        id: "68a1b2c3d4e5f60718293a0b".to_string(),
        first_name: "Maria".to_string(),
        last_name: "Paredes".to_string(),
        birth_date: Some("2001-03-14T00:00:00.000Z".to_string()),
        national_id: Some("1712345678".to_string()),
        city: Some("Quito".to_string()),
        address: Some("Av. Amazonas N24-03".to_string()),
        phone: Some("0998765432".to_string()),
        email: Some("maria.paredes@example.com".to_string()),
    }
}

pub fn get_seed_student_1() -> Student {
    Student {
        id: "68a1b2c3d4e5f60718293a0c".to_string(),
        first_name: "Jorge".to_string(),
        last_name: "Velasco".to_string(),
        birth_date: None,
        national_id: None,
        city: None,
        address: None,
        phone: None,
        email: None,
    }
}

pub fn get_seed_subject_0() -> Subject {
    Subject {
        id: "68a1b2c3d4e5f60718293b01".to_string(),
        name: "Linear Algebra".to_string(),
        code: "MAT201".to_string(),
        credits: Some(4),
    }
}

pub fn get_seed_enrollment_0() -> Enrollment {
    Enrollment {
        id: "68a1b2c3d4e5f60718293c01".to_string(),
        code: "101".to_string(),
        description: "Intro".to_string(),
        student_id: Some("68a1b2c3d4e5f60718293a0b".to_string()),
        subject_id: Some("68a1b2c3d4e5f60718293b01".to_string()),
        student: Some(StudentSummary {
            id: Some("68a1b2c3d4e5f60718293a0b".to_string()),
            first_name: "Maria".to_string(),
            last_name: "Paredes".to_string(),
            national_id: Some("1712345678".to_string()),
            email: Some("maria.paredes@example.com".to_string()),
        }),
        subject: Some(SubjectSummary {
            id: Some("68a1b2c3d4e5f60718293b01".to_string()),
            name: "Linear Algebra".to_string(),
            code: "MAT201".to_string(),
            credits: Some(4),
        }),
    }
}

/// Enrollment whose joins came back null and whose raw references are
/// missing, the worst shape the list endpoint is allowed to return.
pub fn get_seed_enrollment_bare() -> Enrollment {
    Enrollment {
        id: "68a1b2c3d4e5f60718293c02".to_string(),
        code: "102".to_string(),
        description: "Orphaned".to_string(),
        student_id: None,
        subject_id: None,
        student: None,
        subject: None,
    }
}
