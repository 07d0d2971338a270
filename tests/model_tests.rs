mod common;

#[cfg(test)]
pub mod model_tests {
    use super::common::*;

    use matriculas_admin::models::*;

    #[test]
    fn test_student_deserializes_from_wire_success() {
        let student: Student = serde_json::from_str(
            r#"{
                "_id": "68a1b2c3d4e5f60718293a0b",
                "nombre": "Maria",
                "apellido": "Paredes",
                "fecha_nacimiento": "2001-03-14T00:00:00.000Z",
                "cedula": "1712345678",
                "ciudad": "Quito",
                "direccion": "Av. Amazonas N24-03",
                "telefono": "0998765432",
                "email": "maria.paredes@example.com",
                "__v": 0
            }"#,
        )
        .unwrap();

        assert_eq!(student, get_seed_student_0());
    }

    #[test]
    fn test_student_missing_optionals_default_to_none() {
        let student: Student = serde_json::from_str(
            r#"{"_id": "68a1b2c3d4e5f60718293a0c", "nombre": "Jorge", "apellido": "Velasco"}"#,
        )
        .unwrap();

        assert_eq!(student, get_seed_student_1());
    }

    #[test]
    fn test_subject_deserializes_from_wire_success() {
        let subject: Subject = serde_json::from_str(
            r#"{
                "_id": "68a1b2c3d4e5f60718293b01",
                "nombre": "Linear Algebra",
                "codigo": "MAT201",
                "creditos": 4
            }"#,
        )
        .unwrap();

        assert_eq!(subject, get_seed_subject_0());
    }

    #[test]
    fn test_enrollment_deserializes_with_embedded_summaries_success() {
        let enrollment: Enrollment = serde_json::from_str(
            r#"{
                "_id": "68a1b2c3d4e5f60718293c01",
                "codigo": "101",
                "descripcion": "Intro",
                "estudianteId": "68a1b2c3d4e5f60718293a0b",
                "materiaId": "68a1b2c3d4e5f60718293b01",
                "estudiante": {
                    "_id": "68a1b2c3d4e5f60718293a0b",
                    "nombre": "Maria",
                    "apellido": "Paredes",
                    "cedula": "1712345678",
                    "email": "maria.paredes@example.com"
                },
                "materia": {
                    "_id": "68a1b2c3d4e5f60718293b01",
                    "nombre": "Linear Algebra",
                    "codigo": "MAT201",
                    "creditos": 4
                }
            }"#,
        )
        .unwrap();

        assert_eq!(enrollment, get_seed_enrollment_0());
    }

    #[test]
    fn test_enrollment_tolerates_null_summaries() {
        let enrollment: Enrollment = serde_json::from_str(
            r#"{
                "_id": "68a1b2c3d4e5f60718293c02",
                "codigo": "102",
                "descripcion": "Orphaned",
                "estudiante": null,
                "materia": null
            }"#,
        )
        .unwrap();

        assert_eq!(enrollment, get_seed_enrollment_bare());
    }

    #[test]
    fn test_enrollment_display_helpers_render_summaries() {
        let enrollment = get_seed_enrollment_0();

        assert_eq!(enrollment.student_name(), "Maria Paredes");
        assert_eq!(enrollment.student_national_id(), "1712345678");
        assert_eq!(enrollment.student_email(), "maria.paredes@example.com");
        assert_eq!(enrollment.subject_name(), "Linear Algebra");
        assert_eq!(enrollment.subject_code(), "MAT201");
        assert_eq!(enrollment.subject_credits(), "4");
    }

    #[test]
    fn test_enrollment_display_helpers_empty_on_null_summaries() {
        let enrollment = get_seed_enrollment_bare();

        assert_eq!(enrollment.student_name(), "");
        assert_eq!(enrollment.student_national_id(), "");
        assert_eq!(enrollment.student_email(), "");
        assert_eq!(enrollment.subject_name(), "");
        assert_eq!(enrollment.subject_code(), "");
        assert_eq!(enrollment.subject_credits(), "");
    }

    #[test]
    fn test_enrollment_refs_prefer_raw_ids() {
        let mut enrollment = get_seed_enrollment_0();
        enrollment.student_id = Some("other-student".to_string());

        assert_eq!(enrollment.student_ref(), "other-student");
        assert_eq!(enrollment.subject_ref(), "68a1b2c3d4e5f60718293b01");
    }

    #[test]
    fn test_enrollment_refs_fall_back_to_embedded_ids() {
        let mut enrollment = get_seed_enrollment_0();
        enrollment.student_id = None;
        enrollment.subject_id = None;

        assert_eq!(enrollment.student_ref(), "68a1b2c3d4e5f60718293a0b");
        assert_eq!(enrollment.subject_ref(), "68a1b2c3d4e5f60718293b01");
    }

    #[test]
    fn test_enrollment_refs_empty_when_nothing_known() {
        let enrollment = get_seed_enrollment_bare();

        assert_eq!(enrollment.student_ref(), "");
        assert_eq!(enrollment.subject_ref(), "");
    }

    #[test]
    fn test_enrollment_payload_wire_shape_success() {
        let payload = EnrollmentPayload {
            code: "101".to_string(),
            description: "Intro".to_string(),
            student_id: "S".to_string(),
            subject_id: "M".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["codigo"], "101");
        assert_eq!(object["descripcion"], "Intro");
        assert_eq!(object["estudianteId"], "S");
        assert_eq!(object["materiaId"], "M");
    }

    #[test]
    fn test_student_payload_wire_shape_success() {
        let payload = StudentPayload::from_record(&get_seed_student_0());

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 8);
        assert_eq!(object["nombre"], "Maria");
        assert_eq!(object["apellido"], "Paredes");
        assert_eq!(object["fecha_nacimiento"], "2001-03-14");
        assert_eq!(object["cedula"], "1712345678");
        assert_eq!(object["ciudad"], "Quito");
        assert_eq!(object["direccion"], "Av. Amazonas N24-03");
        assert_eq!(object["telefono"], "0998765432");
        assert_eq!(object["email"], "maria.paredes@example.com");
    }

    #[test]
    fn test_subject_payload_serializes_credits_as_number() {
        let payload = SubjectPayload {
            name: "Linear Algebra".to_string(),
            code: "MAT201".to_string(),
            credits: 4,
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["creditos"], 4);
        assert_eq!(value["nombre"], "Linear Algebra");
        assert_eq!(value["codigo"], "MAT201");
    }

    #[test]
    fn test_find_by_id_success() {
        let students = vec![get_seed_student_0(), get_seed_student_1()];

        let found = find_by_id(&students, "68a1b2c3d4e5f60718293a0c");

        assert_eq!(found, Some(&students[1]));
    }

    #[test]
    fn test_find_by_id_fails_on_missing_id() {
        let students = vec![get_seed_student_0(), get_seed_student_1()];

        assert_eq!(find_by_id(&students, "missing"), None);
    }

    #[test]
    fn test_find_by_id_fails_on_empty_collection() {
        let students: Vec<Student> = Vec::new();

        assert_eq!(find_by_id(&students, "68a1b2c3d4e5f60718293a0b"), None);
    }

    #[test]
    fn test_remove_by_id_removes_only_target() {
        let mut students = vec![get_seed_student_0(), get_seed_student_1()];

        remove_by_id(&mut students, "68a1b2c3d4e5f60718293a0b");

        assert_eq!(students, vec![get_seed_student_1()]);
    }

    #[test]
    fn test_remove_by_id_ignores_unknown_id() {
        let mut students = vec![get_seed_student_0(), get_seed_student_1()];

        remove_by_id(&mut students, "missing");

        assert_eq!(students.len(), 2);
    }

    #[test]
    fn test_enrollment_round_trip_prefills_payload_values() {
        let created = EnrollmentPayload {
            code: "101".to_string(),
            description: "Intro".to_string(),
            student_id: "S".to_string(),
            subject_id: "M".to_string(),
        };

        // The API echoes the created record back with its assigned id.
        let echoed: Enrollment = serde_json::from_str(
            r#"{
                "_id": "new-id",
                "codigo": "101",
                "descripcion": "Intro",
                "estudianteId": "S",
                "materiaId": "M"
            }"#,
        )
        .unwrap();

        assert_eq!(EnrollmentPayload::from_record(&echoed), created);
    }

    #[test]
    fn test_date_input_value_reduces_timestamp() {
        assert_eq!(date_input_value("2001-03-14T00:00:00.000Z"), "2001-03-14");
        assert_eq!(date_input_value("1999-12-31T23:59:59+05:00"), "1999-12-31");
    }

    #[test]
    fn test_date_input_value_passes_bare_date_through() {
        assert_eq!(date_input_value("2001-03-14"), "2001-03-14");
    }

    #[test]
    fn test_date_input_value_degrades_to_empty_on_garbage() {
        assert_eq!(date_input_value("not a date"), "");
        assert_eq!(date_input_value(""), "");
    }
}
