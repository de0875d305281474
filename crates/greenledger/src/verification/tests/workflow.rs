use super::common::*;
use crate::verification::{
    LoanInfo, StepStatus, VerificationError, VerificationWorkflow, WizardStep,
    VERIFICATION_CHECKS,
};
use chrono::NaiveDate;

#[test]
fn new_workflow_starts_empty_on_loan_info() {
    let workflow = VerificationWorkflow::new();

    assert_eq!(workflow.step(), WizardStep::CollectingLoanInfo);
    assert_eq!(workflow.green_score(), None);
    assert!(workflow.uploaded_documents().is_empty());
    assert!(!workflow.can_advance_to_metrics());
}

#[test]
fn loan_info_gate_lists_missing_fields() {
    let mut workflow = VerificationWorkflow::new();
    workflow
        .set_loan_info(LoanInfo::new("", "1200000", ""))
        .expect("edits allowed on step 1");

    let err = workflow.advance_to_metrics().expect_err("gate holds");

    assert_eq!(
        err,
        VerificationError::Incomplete(vec![
            "borrower".to_string(),
            "project_category".to_string(),
        ])
    );
    assert_eq!(workflow.step(), WizardStep::CollectingLoanInfo);
}

#[test]
fn loan_info_gate_rejects_unparseable_amount() {
    let mut workflow = VerificationWorkflow::new();
    workflow
        .set_loan_info(LoanInfo::new("GreenBuild", "three million", "Green Building"))
        .expect("edits allowed on step 1");

    assert!(!workflow.can_advance_to_metrics());
    assert_eq!(
        workflow.advance_to_metrics(),
        Err(VerificationError::InvalidAmount("three million".to_string()))
    );
}

#[test]
fn unknown_category_still_advances_with_base_checklist() {
    let mut workflow = VerificationWorkflow::new();
    workflow
        .set_loan_info(LoanInfo::new("Tidal Co", "900000", "Tidal Energy"))
        .expect("edits allowed on step 1");
    workflow.advance_to_metrics().expect("category is only required to be non-empty");
    workflow.calculate_score().expect("score with default metrics");

    assert_eq!(workflow.green_score(), Some(0));
    assert_eq!(workflow.required_documents().len(), 3);
}

#[test]
fn calculating_score_moves_to_documents() {
    let workflow = workflow_at_documents();

    assert_eq!(workflow.step(), WizardStep::UploadingDocuments);
    assert_eq!(workflow.green_score(), Some(75));
    assert_eq!(workflow.outstanding_documents().len(), 5);
}

#[test]
fn transitions_from_wrong_step_are_rejected() {
    let mut workflow = VerificationWorkflow::new();

    assert_eq!(
        workflow.calculate_score(),
        Err(VerificationError::InvalidStep {
            expected: WizardStep::CollectingMetrics,
            actual: WizardStep::CollectingLoanInfo,
        })
    );
    assert!(matches!(
        workflow.mark_uploaded("Carbon Footprint Analysis"),
        Err(VerificationError::InvalidStep { .. })
    ));
    assert!(matches!(
        workflow.complete_verification(completion_instant(), &tag_policy()),
        Err(VerificationError::InvalidStep { .. })
    ));
}

#[test]
fn completion_requires_every_document() {
    let mut workflow = workflow_at_documents();
    workflow
        .mark_uploaded("Environmental Impact Assessment")
        .expect("required document");
    workflow
        .mark_uploaded("Environmental Impact Assessment")
        .expect("re-marking is a no-op");

    assert_eq!(workflow.uploaded_documents().len(), 1);
    assert!(!workflow.can_complete());

    let err = workflow
        .complete_verification(completion_instant(), &tag_policy())
        .expect_err("documents outstanding");
    match err {
        VerificationError::Incomplete(missing) => {
            assert_eq!(missing.len(), 4);
            assert_eq!(missing[0], "Carbon Footprint Analysis");
        }
        other => panic!("expected incomplete documents, got {other:?}"),
    }
}

#[test]
fn documents_outside_the_checklist_are_rejected() {
    let mut workflow = workflow_at_documents();

    assert_eq!(
        workflow.mark_uploaded("Wind Turbine Certifications"),
        Err(VerificationError::UnknownDocument(
            "Wind Turbine Certifications".to_string()
        ))
    );
}

#[test]
fn completion_records_checks_and_issues_tag() {
    let mut workflow = workflow_at_documents();
    upload_all(&mut workflow);
    assert!(workflow.can_complete());

    let instant = completion_instant();
    let tag = workflow
        .complete_verification(instant, &tag_policy())
        .expect("verification completes")
        .clone();

    assert_eq!(workflow.step(), WizardStep::VerificationComplete);
    assert_eq!(tag.id, format!("GT-{}", instant.timestamp_millis()));
    assert_eq!(tag.score, 75);
    assert_eq!(tag.verified_by, "Northwind Assurance");
    assert_eq!(tag.issued_date, NaiveDate::from_ymd_opt(2026, 1, 5).expect("date"));
    assert_eq!(tag.expiry_date, NaiveDate::from_ymd_opt(2027, 1, 5).expect("date"));
    assert!(tag.immutable);

    let steps = workflow.verification_steps();
    assert_eq!(steps.len(), VERIFICATION_CHECKS.len());
    assert!(steps
        .iter()
        .all(|step| step.status == StepStatus::Completed && step.completed_at == Some(instant)));
    assert_eq!(steps[4].step, "GreenTag Issuance");
    assert_eq!(steps[0].id, "1");
}

#[test]
fn back_keeps_entered_data() {
    let mut workflow = workflow_at_documents();
    workflow
        .mark_uploaded("Carbon Footprint Analysis")
        .expect("required document");

    assert_eq!(workflow.back(), Ok(WizardStep::CollectingMetrics));
    assert_eq!(workflow.back(), Ok(WizardStep::CollectingLoanInfo));
    assert_eq!(
        workflow.back(),
        Err(VerificationError::NoPreviousStep(WizardStep::CollectingLoanInfo))
    );

    assert_eq!(workflow.loan_info(), &solar_loan_info());
    assert_eq!(workflow.green_score(), Some(75));
    assert_eq!(workflow.uploaded_documents().len(), 1);
}

#[test]
fn reset_clears_everything() {
    let mut workflow = workflow_at_documents();
    upload_all(&mut workflow);
    workflow
        .complete_verification(completion_instant(), &tag_policy())
        .expect("verification completes");

    workflow.reset();

    assert_eq!(workflow, VerificationWorkflow::new());
}
