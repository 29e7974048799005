use anyhow::Result;
use marina_registry::{
    accept_payment, apply_monthly_fees, load_registry, save_registry, Boat, Category, Location,
    MarinaError, Registry,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn data_file(lines: &[&str]) -> Result<NamedTempFile> {
    let mut temp_file = NamedTempFile::new()?;
    for line in lines {
        writeln!(temp_file, "{}", line)?;
    }
    Ok(temp_file)
}

#[test]
fn test_load_rascal_with_non_numeric_slip() -> Result<()> {
    let temp_file = data_file(&["Rascal,23,slip,A7,500.00"])?;
    let registry = load_registry(temp_file.path())?;

    let boats = registry.list();
    assert_eq!(boats.len(), 1);
    assert_eq!(boats[0].name(), "Rascal");
    assert_eq!(boats[0].category(), Category::Slip);
    assert_eq!(boats[0].location(), &Location::Slip(0));
    assert_eq!(boats[0].balance(), 500.0);
    Ok(())
}

#[test]
fn test_loaded_boats_are_sorted_ignoring_case() -> Result<()> {
    let temp_file = data_file(&[
        "zodiac,12,storage,44,0.00",
        "Mariner,30,land,B,10.00",
        "anchor,18,trailor,TR-1,5.25",
        "Bluewater,41,slip,9,0.00",
    ])?;
    let registry = load_registry(temp_file.path())?;

    let names: Vec<&str> = registry.iter().map(|b| b.name()).collect();
    assert_eq!(names, vec!["anchor", "Bluewater", "Mariner", "zodiac"]);
    Ok(())
}

#[test]
fn test_trailer_month_from_zero() -> Result<()> {
    let temp_file = data_file(&["Hauler,20,trailor,HX-2,0.00"])?;
    let mut registry = load_registry(temp_file.path())?;

    apply_monthly_fees(&mut registry);
    assert_eq!(
        registry.find("hauler").map(|b| format!("{:.2}", b.balance())),
        Some("500.00".to_string())
    );
    Ok(())
}

#[test]
fn test_fees_payment_and_save_cycle() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("boats.csv");

    let mut registry = Registry::new();
    registry.insert(Boat::new("Osprey", 25.0, Location::Land('C'), 0.0))?;
    registry.insert(Boat::new("Kestrel", 30.0, Location::Storage(17), 12.0))?;

    apply_monthly_fees(&mut registry);
    apply_monthly_fees(&mut registry);
    // Land: 2 * 14.00 * 25 = 700.00
    assert_eq!(accept_payment(&mut registry, "OSPREY", 700.0)?, 0.0);

    let err = accept_payment(&mut registry, "Kestrel", 1000.0).unwrap_err();
    assert!(matches!(err, MarinaError::PaymentExceedsBalance { .. }));

    save_registry(&registry, &path)?;
    let content = std::fs::read_to_string(&path)?;
    assert_eq!(
        content,
        "Kestrel,30,storage,17,684.00\nOsprey,25,land,C,0.00\n"
    );

    let reloaded = load_registry(&path)?;
    assert_eq!(reloaded.len(), 2);
    let kestrel = reloaded.find("kestrel").unwrap();
    assert_eq!(kestrel.location(), &Location::Storage(17));
    assert!((kestrel.balance() - 684.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_capacity_is_enforced_on_load() -> Result<()> {
    let lines: Vec<String> = (0..125)
        .map(|i| format!("Boat{:03},20,slip,{},0.00", i, i))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let temp_file = data_file(&refs)?;

    let mut registry = load_registry(temp_file.path())?;
    assert_eq!(registry.len(), 120);
    assert!(registry.find("Boat119").is_some());
    assert!(registry.find("Boat120").is_none());

    let err = registry
        .insert(Boat::new("Extra", 10.0, Location::Slip(1), 0.0))
        .unwrap_err();
    assert!(matches!(err, MarinaError::CapacityExceeded { .. }));
    assert_eq!(registry.len(), 120);
    Ok(())
}

#[test]
fn test_permissive_rows_load_without_error() -> Result<()> {
    let temp_file = data_file(&[
        "Shorty,14",
        "Oddball,22,houseboat,x,3.00",
        "Bay,16,land,q,1.00",
    ])?;
    let registry = load_registry(temp_file.path())?;

    assert_eq!(registry.len(), 3);
    let shorty = registry.find("shorty").unwrap();
    assert_eq!(shorty.category(), Category::Storage);
    assert_eq!(shorty.balance(), 0.0);

    let oddball = registry.find("Oddball").unwrap();
    assert_eq!(oddball.location(), &Location::Storage(0));
    assert_eq!(oddball.balance(), 3.0);

    assert_eq!(registry.find("bay").unwrap().location(), &Location::Land('q'));
    Ok(())
}
