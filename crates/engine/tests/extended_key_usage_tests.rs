mod common;

use docsign_usage as du;
use du::{DiagnosticKind, ExtKeyUsage};

fn policy(required: &[ExtKeyUsage], allowed: &[ExtKeyUsage]) -> du::PolicyConfig {
    du::PolicyConfig {
        required_ekus: required.to_vec(),
        allowed_ekus: allowed.to_vec(),
        ..Default::default()
    }
}

#[test]
fn empty_eku_list_is_rejected_regardless_of_policy() {
    let policies = [
        policy(&[], &[]),
        policy(&[ExtKeyUsage::DocumentSigning], &[]),
        policy(&[], &[ExtKeyUsage::Any, ExtKeyUsage::EmailProtection]),
        du::PolicyConfig::secure_default(),
    ];
    for p in &policies {
        let check = du::check_extended_key_usage(&[], p);
        assert!(!check.is_valid());
        assert_eq!(check.kind(), Some(DiagnosticKind::NoExtendedKeyUsage));
        assert_eq!(check.message(), Some("certificate has no Extended Key Usage extension"));
    }
}

#[test]
fn required_match_wins_over_allowed_and_any() {
    let p = policy(&[ExtKeyUsage::DocumentSigning], &[ExtKeyUsage::EmailProtection]);
    let ekus = [ExtKeyUsage::Any, ExtKeyUsage::EmailProtection, ExtKeyUsage::DocumentSigning];
    let check = du::check_extended_key_usage(&ekus, &p);
    assert_eq!(check, du::UsageCheck::passed());
}

#[test]
fn allowed_match_warns_when_required_configured() {
    let p = policy(&[ExtKeyUsage::DocumentSigning], &[ExtKeyUsage::ClientAuth]);
    let check = du::check_extended_key_usage(&[ExtKeyUsage::ClientAuth, ExtKeyUsage::Any], &p);
    assert!(check.is_valid());
    assert_eq!(check.kind(), Some(DiagnosticKind::NotPreferredExtendedKeyUsage));
    assert_eq!(
        check.message(),
        Some("certificate uses acceptable but not preferred Extended Key Usage")
    );
}

#[test]
fn allowed_match_is_clean_without_required() {
    let p = policy(&[], &[ExtKeyUsage::ClientAuth]);
    let check = du::check_extended_key_usage(&[ExtKeyUsage::ClientAuth], &p);
    assert_eq!(check, du::UsageCheck::passed());
}

#[test]
fn any_purpose_alone_is_accepted_with_warning() {
    let policies = [
        policy(&[], &[]),
        policy(&[ExtKeyUsage::DocumentSigning], &[ExtKeyUsage::EmailProtection]),
    ];
    for p in policies {
        let check = du::check_extended_key_usage(&[ExtKeyUsage::Any], &p);
        assert!(check.is_valid());
        assert_eq!(check.kind(), Some(DiagnosticKind::PermissiveExtendedKeyUsage));
        assert_eq!(
            check.message(),
            Some("certificate uses ExtKeyUsageAny which is too permissive for PDF signing")
        );
    }
}

#[test]
fn unmatched_purposes_are_rejected() {
    let p = policy(&[ExtKeyUsage::DocumentSigning], &[ExtKeyUsage::EmailProtection]);
    let ekus = [
        ExtKeyUsage::ServerAuth,
        ExtKeyUsage::CodeSigning,
        ExtKeyUsage::Other("1.3.6.1.4.1.311.10.3.12".into()),
    ];
    let check = du::check_extended_key_usage(&ekus, &p);
    assert!(!check.is_valid());
    assert_eq!(check.kind(), Some(DiagnosticKind::UnsuitableExtendedKeyUsage));
    assert_eq!(
        check.message(),
        Some("certificate does not have suitable Extended Key Usage for PDF signing")
    );
}

#[test]
fn custom_oid_can_be_required() {
    let vendor: ExtKeyUsage = "1.3.6.1.4.1.311.10.3.12".parse().unwrap();
    let p = policy(&[vendor.clone()], &[]);
    let check = du::check_extended_key_usage(&[ExtKeyUsage::ServerAuth, vendor], &p);
    assert_eq!(check, du::UsageCheck::passed());
}

#[test]
fn any_in_allowed_list_counts_as_allowed() {
    let p = policy(&[ExtKeyUsage::DocumentSigning], &[ExtKeyUsage::Any]);
    let check = du::check_extended_key_usage(&[ExtKeyUsage::Any], &p);
    assert_eq!(check.kind(), Some(DiagnosticKind::NotPreferredExtendedKeyUsage));
}

#[test]
fn worked_examples() {
    let p = common::document_signing_policy();

    let d = du::evaluate(&common::signing_usage(&[ExtKeyUsage::DocumentSigning]), &p);
    assert!(d.key_usage.is_valid() && d.key_usage.diagnostic().is_none());
    assert!(d.extended_key_usage.is_valid() && d.extended_key_usage.diagnostic().is_none());

    let d = du::evaluate(&common::signing_usage(&[ExtKeyUsage::Any]), &p);
    assert_eq!(d.key_usage, du::UsageCheck::passed());
    assert!(d.extended_key_usage.is_valid());
    assert!(d.extended_key_usage.message().unwrap().contains("uses ExtKeyUsageAny"));

    let d = du::evaluate(&common::signing_usage(&[]), &p);
    assert_eq!(d.key_usage, du::UsageCheck::passed());
    assert!(!d.extended_key_usage.is_valid());
    assert!(d.extended_key_usage.message().unwrap().contains("no Extended Key Usage extension"));
}
