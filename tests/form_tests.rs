mod common;

#[cfg(test)]
pub mod form_tests {
    use super::common::*;

    use matriculas_admin::api::LoginResponse;
    use matriculas_admin::frontend::state::FormState;
    use matriculas_admin::models::*;

    #[test]
    fn test_student_validation_success() {
        let payload = StudentPayload::from_record(&get_seed_student_0());

        assert!(payload.validate().is_empty());
    }

    #[test]
    fn test_student_validation_success_ignores_empty_optionals() {
        let payload = StudentPayload {
            first_name: "Jorge".to_string(),
            last_name: "Velasco".to_string(),
            birth_date: "1998-07-01".to_string(),
            ..Default::default()
        };

        assert!(payload.validate().is_empty());
    }

    #[test]
    fn test_student_validation_fails_on_empty_required_fields() {
        let errors = StudentPayload::default().validate();

        assert!(!errors.is_empty());
        assert!(errors.first_name.is_some());
        assert!(errors.last_name.is_some());
        assert!(errors.birth_date.is_some());
    }

    #[test]
    fn test_student_validation_fails_on_blank_required_field() {
        let payload = StudentPayload {
            first_name: "   ".to_string(),
            last_name: "Velasco".to_string(),
            birth_date: "1998-07-01".to_string(),
            ..Default::default()
        };

        let errors = payload.validate();

        assert!(errors.first_name.is_some());
        assert!(errors.last_name.is_none());
        assert!(errors.birth_date.is_none());
    }

    #[test]
    fn test_subject_form_validate_success_parses_credits() {
        let form = SubjectForm {
            name: "Linear Algebra".to_string(),
            code: "MAT201".to_string(),
            credits: " 4 ".to_string(),
        };

        let payload = form.validate().unwrap();

        assert_eq!(
            payload,
            SubjectPayload {
                name: "Linear Algebra".to_string(),
                code: "MAT201".to_string(),
                credits: 4,
            }
        );
    }

    #[test]
    fn test_subject_form_validate_fails_on_empty_required_fields() {
        let errors = SubjectForm::default().validate().unwrap_err();

        assert!(errors.name.is_some());
        assert!(errors.code.is_some());
        assert!(errors.credits.is_some());
    }

    #[test]
    fn test_subject_form_validate_fails_on_non_numeric_credits() {
        let form = SubjectForm {
            name: "Linear Algebra".to_string(),
            code: "MAT201".to_string(),
            credits: "four".to_string(),
        };

        let errors = form.validate().unwrap_err();

        assert!(errors.name.is_none());
        assert!(errors.code.is_none());
        assert!(errors.credits.is_some());
    }

    #[test]
    fn test_subject_form_from_record_success() {
        let form = SubjectForm::from_record(&get_seed_subject_0());

        assert_eq!(form.credits, "4");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_enrollment_validation_success() {
        let payload = EnrollmentPayload {
            code: "101".to_string(),
            description: "Intro".to_string(),
            student_id: "S".to_string(),
            subject_id: "M".to_string(),
        };

        assert!(payload.validate().is_empty());
    }

    #[test]
    fn test_enrollment_validation_fails_on_missing_selection() {
        let payload = EnrollmentPayload {
            code: "101".to_string(),
            description: "Intro".to_string(),
            student_id: String::new(),
            subject_id: String::new(),
        };

        let errors = payload.validate();

        assert!(!errors.is_empty());
        assert!(errors.code.is_none());
        assert!(errors.description.is_none());
        assert!(errors.student_id.is_some());
        assert!(errors.subject_id.is_some());
    }

    #[test]
    fn test_enrollment_validation_fails_on_empty_text_fields() {
        let errors = EnrollmentPayload::default().validate();

        assert!(errors.code.is_some());
        assert!(errors.description.is_some());
    }

    #[test]
    fn test_form_state_submit_gate() {
        assert!(FormState::Ready.can_submit());
        assert!(!FormState::Loading.can_submit());
        assert!(!FormState::Submitting.can_submit());
        assert!(!FormState::Saved.can_submit());
        assert!(!FormState::NotFound.can_submit());
    }

    #[test]
    fn test_form_state_busy_covers_submit_and_redirect() {
        assert!(FormState::Submitting.is_busy());
        assert!(FormState::Saved.is_busy());
        assert!(!FormState::Ready.is_busy());
        assert!(!FormState::Loading.is_busy());
    }

    #[test]
    fn test_login_display_name_prefers_wire_name() {
        let response = LoginResponse {
            token: "tok".to_string(),
            name: Some("Admin".to_string()),
        };

        assert_eq!(response.display_name("admin@uni.edu"), "Admin");
    }

    #[test]
    fn test_login_display_name_falls_back_to_email_local_part() {
        let response = LoginResponse {
            token: "tok".to_string(),
            name: None,
        };

        assert_eq!(response.display_name("admin@uni.edu"), "admin");

        let blank = LoginResponse {
            token: "tok".to_string(),
            name: Some(String::new()),
        };

        assert_eq!(blank.display_name("admin@uni.edu"), "admin");
    }
}
