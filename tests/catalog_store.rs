mod support;

use anyhow::Result;
use qualiscout::{CatalogError, CatalogStore};
use support::CatalogFixture;

#[test]
fn catalog_is_cached_for_the_store_lifetime() -> Result<()> {
    let fixture = CatalogFixture::write("area,nome\nSaude,R1\n");
    let store = fixture.store();
    assert_eq!(store.load()?.records().len(), 1);

    // The first successful load is the only filesystem read.
    std::fs::remove_file(&fixture.path)?;
    assert_eq!(store.load()?.records().len(), 1);
    Ok(())
}

#[test]
fn failed_load_is_not_cached() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("late_catalog.csv");
    let store = CatalogStore::new(&path);
    assert!(matches!(store.load(), Err(CatalogError::Missing { .. })));

    std::fs::write(&path, "area,nome\nDireito,R1\n")?;
    assert_eq!(store.load()?.records().len(), 1);
    Ok(())
}

#[test]
fn distinct_areas_supports_area_enumeration() -> Result<()> {
    let fixture = CatalogFixture::write(
        "area,nome\nSaude,R1\nEngenharia,R2\nSaude,R3\n",
    );
    let store = fixture.store();
    assert_eq!(
        store.load()?.distinct_areas(),
        vec!["Engenharia".to_string(), "Saude".to_string()]
    );
    Ok(())
}

#[test]
fn ragged_csv_is_malformed_and_fatal() {
    let fixture = CatalogFixture::write("area,nome\nSaude,R1,extra-cell\n");
    let store = fixture.store();
    assert!(matches!(
        store.load(),
        Err(CatalogError::Unreadable { .. })
    ));
}
