use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BorderError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BorderError::config("x").to_string().contains("config error:"));
    assert!(BorderError::render("x").to_string().contains("render error:"));
    assert!(
        BorderError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn variants_carry_their_message() {
    let err = BorderError::config("hex color '#12' must have 3, 6 or 8 digits");
    assert!(matches!(&err, BorderError::Config(msg) if msg.contains("#12")));
    assert!(matches!(BorderError::render("x"), BorderError::Render(_)));
}
