use std::sync::Arc;

use super::common::*;
use crate::verification::{
    LoanInfo, SessionId, VerificationError, VerificationService, VerificationServiceError,
    WizardStep, WorkflowRepository,
};
use crate::portfolio::RepositoryError;

#[test]
fn start_hands_out_distinct_sessions() {
    let service = service_with(MemoryWorkflows::default());

    let first = service.start().expect("session starts");
    let second = service.start().expect("session starts");

    assert_ne!(first.session_id, second.session_id);
    assert!(first.session_id.0.starts_with("vs-"));
    assert_eq!(first.step, WizardStep::CollectingLoanInfo);
    assert!(!first.can_continue);
    assert_eq!(first.documents.len(), 3);
}

#[test]
fn full_walkthrough_issues_green_tag() {
    let repository = MemoryWorkflows::default();
    let service = service_with(repository.clone());
    let session = service.start().expect("session starts").session_id;

    let view = service
        .submit_loan_info(&session, solar_loan_info())
        .expect("loan info accepted");
    assert_eq!(view.step_number, 2);

    let view = service
        .submit_metrics(&session, solar_metrics())
        .expect("metrics accepted");
    assert_eq!(view.green_score, Some(75));
    assert_eq!(
        view.score_category.map(|category| category.label),
        Some("Good")
    );
    assert_eq!(view.documents.len(), 5);
    assert!(!view.can_continue);

    let names: Vec<&str> = view.documents.iter().map(|entry| entry.name).collect();
    for name in names {
        service
            .upload_document(&session, name)
            .expect("document accepted");
    }

    let view = service
        .complete_at(&session, completion_instant())
        .expect("verification completes");
    let tag = view.green_tag.expect("tag issued");
    assert_eq!(view.step, WizardStep::VerificationComplete);
    assert_eq!(tag.verified_by, "Northwind Assurance");
    assert_eq!(view.verification_steps.len(), 5);

    let stored = repository
        .fetch(&session)
        .expect("fetch succeeds")
        .expect("session stored");
    assert_eq!(stored.workflow.green_tag(), Some(&tag));
}

#[test]
fn rejected_transition_leaves_stored_state_untouched() {
    let repository = MemoryWorkflows::default();
    let service = service_with(repository.clone());
    let session = service.start().expect("session starts").session_id;

    let err = service
        .submit_loan_info(&session, LoanInfo::new("SolarTech Industries", "", "Solar Energy"))
        .expect_err("amount is required");
    assert!(matches!(
        err,
        VerificationServiceError::Workflow(VerificationError::Incomplete(_))
    ));

    let stored = repository
        .fetch(&session)
        .expect("fetch succeeds")
        .expect("session stored");
    assert_eq!(stored.workflow.loan_info(), &LoanInfo::default());
    assert_eq!(stored.workflow.step(), WizardStep::CollectingLoanInfo);
}

#[test]
fn back_and_reset_round_trip_through_storage() {
    let service = service_with(MemoryWorkflows::default());
    let session = service.start().expect("session starts").session_id;
    service
        .submit_loan_info(&session, solar_loan_info())
        .expect("loan info accepted");

    let view = service.back(&session).expect("back to step 1");
    assert_eq!(view.step, WizardStep::CollectingLoanInfo);
    assert_eq!(view.loan_info.borrower, "SolarTech Industries");
    assert!(view.can_continue);

    let view = service.reset(&session).expect("reset");
    assert_eq!(view.loan_info, LoanInfo::default());

    let err = service.back(&session).expect_err("nothing before step 1");
    assert!(matches!(
        err,
        VerificationServiceError::Workflow(VerificationError::NoPreviousStep(_))
    ));
}

#[test]
fn unknown_session_is_not_found() {
    let service = service_with(MemoryWorkflows::default());

    let err = service
        .get(&SessionId("vs-missing".to_string()))
        .expect_err("no such session");

    assert!(matches!(
        err,
        VerificationServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn storage_failures_surface_as_repository_errors() {
    let service = VerificationService::new(Arc::new(UnavailableWorkflows), tag_policy());

    let err = service.start().expect_err("store offline");

    assert!(matches!(
        err,
        VerificationServiceError::Repository(RepositoryError::Unavailable(_))
    ));
    assert_eq!(err.to_string(), "repository unavailable: session store offline");
}
