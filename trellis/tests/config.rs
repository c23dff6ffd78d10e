//! Config and option types load from JSON.

use trellis::widgets::input::{InputKind, InputSize, InputTheme, InputVariant};
use trellis::widgets::table::{Alignment, SortDirection, TableConfig};

#[test]
fn test_table_config_fields_default() {
    let config: TableConfig = serde_json::from_str(r#"{ "selectable": true }"#).unwrap();
    assert_eq!(config, TableConfig::new().selectable(true));

    let config: TableConfig = serde_json::from_str("{}").unwrap();
    assert!(!config.loading);
    assert!(!config.selectable);
}

#[test]
fn test_enums_use_lowercase_names() {
    let direction: SortDirection = serde_json::from_str(r#""descending""#).unwrap();
    assert_eq!(direction, SortDirection::Descending);
    assert_eq!(serde_json::to_string(&Alignment::Right).unwrap(), r#""right""#);

    let variant: InputVariant = serde_json::from_str(r#""ghost""#).unwrap();
    assert_eq!(variant, InputVariant::Ghost);
    let size: InputSize = serde_json::from_str(r#""lg""#).unwrap();
    assert_eq!(size, InputSize::Lg);
    let kind: InputKind = serde_json::from_str(r#""password""#).unwrap();
    assert_eq!(kind, InputKind::Password);
    let theme: InputTheme = serde_json::from_str(r#""dark""#).unwrap();
    assert_eq!(theme, InputTheme::Dark);
}

#[test]
fn test_unknown_variant_rejected() {
    assert!(serde_json::from_str::<InputVariant>(r#""dashed""#).is_err());
}
