use super::*;

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn half_alpha_blends() {
    // Premultiplied white at ~50% over opaque black.
    assert_eq!(over([0, 0, 0, 255], [128, 128, 128, 128]), [128, 128, 128, 255]);
}

#[test]
fn in_place_checks_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    over_in_place(&mut dst, &[255, 0, 0, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![255, 0, 0, 255, 0, 0, 0, 0]);
}
