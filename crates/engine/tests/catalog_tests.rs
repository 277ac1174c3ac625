use docsign_usage as du;
use du::ExtKeyUsage;

#[test]
fn default_catalog_has_four_entries_in_order() {
    assert_eq!(
        du::default_ekus(),
        &[
            ExtKeyUsage::DocumentSigning,
            ExtKeyUsage::EmailProtection,
            ExtKeyUsage::ClientAuth,
            ExtKeyUsage::Any,
        ]
    );
}

#[test]
fn default_catalog_oids() {
    let oids: Vec<&str> = du::default_ekus().iter().map(ExtKeyUsage::oid).collect();
    assert_eq!(
        oids,
        ["1.3.6.1.5.5.7.3.36", "1.3.6.1.5.5.7.3.4", "1.3.6.1.5.5.7.3.2", "2.5.29.37.0"]
    );
    assert_eq!(du::DOCUMENT_SIGNING.oid, oids[0]);
}

#[test]
fn default_catalog_is_stable_across_calls() {
    assert!(std::ptr::eq(du::default_ekus(), du::default_ekus()));
}
