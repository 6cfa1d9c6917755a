// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use vitalsim_core::DeviceIdentity;
use vitalsim_sampler::{RangeProfile, SampleGenerator};

#[test]
fn ten_thousand_normal_draws_stay_in_range() {
    // Arrange
    let identity = DeviceIdentity::generate();
    let generator = SampleGenerator::normal();

    // Act & Assert
    for _ in 0..10_000 {
        let sample = generator.next_sample(&identity);
        assert!(
            (3.9..11.0).contains(&sample.value()),
            "out-of-range draw: {}",
            sample.value()
        );
    }
}

#[test]
fn normal_draws_are_approximately_uniform() {
    // Arrange
    let identity = DeviceIdentity::generate();
    let generator = SampleGenerator::normal();
    let profile = generator.profile();
    let width = (profile.max() - profile.min()) / 4.0;
    let mut quartiles = [0usize; 4];

    // Act
    for _ in 0..10_000 {
        let value = generator.next_sample(&identity).value();
        let bucket = (((value - profile.min()) / width) as usize).min(3);
        quartiles[bucket] += 1;
    }

    // Assert: each quartile holds roughly a quarter of the draws. The
    // bounds are loose enough that a correct uniform source fails with
    // negligible probability, but clustering at the bounds cannot pass.
    for (i, count) in quartiles.iter().enumerate() {
        assert!(
            (2_000..=3_000).contains(count),
            "quartile {i} holds {count} of 10000 draws"
        );
    }
}

#[test]
fn low_and_high_profiles_draw_from_their_own_ranges() {
    // Arrange
    let identity = DeviceIdentity::generate();
    let low = SampleGenerator::new(RangeProfile::LOW);
    let high = SampleGenerator::new(RangeProfile::HIGH);

    // Act & Assert
    for _ in 0..1_000 {
        assert!(RangeProfile::LOW.contains(low.next_sample(&identity).value()));
        assert!(RangeProfile::HIGH.contains(high.next_sample(&identity).value()));
    }
}

#[test]
fn samples_are_stamped_with_the_shared_identity() {
    // Arrange
    let identity = DeviceIdentity::generate();
    let generator = SampleGenerator::default();

    // Act
    let first = generator.next_sample(&identity);
    let second = generator.next_sample(&identity);

    // Assert
    assert_eq!(first.device_id(), &identity);
    assert_eq!(second.device_id(), &identity);
}
