// Host-side tests for particle store construction.

use tree_core::{
    ImageId, ParticleKind, ParticleStore, CANDY_CANE_SIZE, FOLIAGE_SIZE, GIFT_SIZE,
    IMAGE_ANCHORS, IMAGE_SIZE, PARTICLE_COUNT, RING_SIZE, STAR_SIZE,
};

#[test]
fn store_with_two_images_has_expected_composition() {
    let store = ParticleStore::new(PARTICLE_COUNT, 2, 2024).unwrap();
    assert_eq!(store.len(), 1802);
    assert_eq!(store.image_count(), 2);

    let stars = store
        .particles()
        .iter()
        .filter(|p| p.kind == ParticleKind::Star)
        .count();
    assert_eq!(stars, 1);
    assert_eq!(store.particles()[0].kind, ParticleKind::Star);

    let images: Vec<_> = store
        .particles()
        .iter()
        .filter(|p| p.kind.is_image())
        .collect();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].tree_target, IMAGE_ANCHORS[0]);
    assert_eq!(images[1].tree_target, IMAGE_ANCHORS[1]);
    assert_eq!(
        images[0].kind,
        ParticleKind::ImageOrnament { image: ImageId(0) }
    );
    // ornaments are appended after the procedural set
    assert!(store.particles()[..PARTICLE_COUNT]
        .iter()
        .all(|p| !p.kind.is_image()));
}

#[test]
fn store_without_images_has_no_ornaments() {
    let store = ParticleStore::new(300, 0, 5).unwrap();
    assert_eq!(store.len(), 300);
    assert!(store.particles().iter().all(|p| !p.kind.is_image()));
}

#[test]
fn five_images_use_every_anchor_once() {
    let store = ParticleStore::new(10, 5, 5).unwrap();
    let anchors: Vec<_> = store
        .particles()
        .iter()
        .filter(|p| p.kind.is_image())
        .map(|p| p.tree_target)
        .collect();
    assert_eq!(anchors, IMAGE_ANCHORS.to_vec());
}

#[test]
fn kind_mix_roughly_matches_bands() {
    let store = ParticleStore::new(PARTICLE_COUNT, 0, 77).unwrap();
    let n = (store.len() - 1) as f32;
    let share = |pred: fn(&ParticleKind) -> bool| {
        store.particles()[1..].iter().filter(|p| pred(&p.kind)).count() as f32 / n
    };
    let foliage = share(|k| matches!(k, ParticleKind::Foliage { .. }));
    let gift = share(|k| matches!(k, ParticleKind::Gift { .. }));
    let cane = share(|k| matches!(k, ParticleKind::CandyCane));
    let ring = share(|k| matches!(k, ParticleKind::Ring));
    assert!((foliage - 0.75).abs() < 0.05, "foliage share {foliage}");
    assert!((gift - 0.08).abs() < 0.03, "gift share {gift}");
    assert!((cane - 0.05).abs() < 0.03, "cane share {cane}");
    assert!((ring - 0.12).abs() < 0.04, "ring share {ring}");
}

#[test]
fn sizes_and_spin_follow_kind() {
    let store = ParticleStore::new(PARTICLE_COUNT, 3, 11).unwrap();
    for p in store.particles() {
        let in_range = |(lo, hi): (f32, f32)| p.size >= lo && p.size < hi;
        match p.kind {
            ParticleKind::Foliage { .. } => assert!(in_range(FOLIAGE_SIZE)),
            ParticleKind::Gift { .. } => assert!(in_range(GIFT_SIZE)),
            ParticleKind::CandyCane => assert!(in_range(CANDY_CANE_SIZE)),
            ParticleKind::Ring => assert!(in_range(RING_SIZE)),
            ParticleKind::Star => {
                assert_eq!(p.size, STAR_SIZE);
                assert_eq!(p.spin, 0.0);
                assert_eq!(p.rotation, 0.0);
            }
            ParticleKind::ImageOrnament { .. } => {
                assert_eq!(p.size, IMAGE_SIZE);
                assert_eq!(p.spin, 0.0);
            }
        }
    }
}
