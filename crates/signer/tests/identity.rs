use identity_signer::{DerivationPath, Identity};
use identity_signer::identity::HARDENED;

fn identity_from_mask(mask: u32) -> Identity {
    Identity {
        proto: (mask & 1 != 0).then(|| "ssh".to_string()),
        user: (mask & 2 != 0).then(|| "u".to_string()),
        host: (mask & 4 != 0).then(|| "h".to_string()),
        port: (mask & 8 != 0).then(|| "22".to_string()),
        path: (mask & 16 != 0).then(|| "/p".to_string()),
        index: 0,
    }
}

#[test]
fn canonicalization_is_total_over_all_field_combinations() {
    for mask in 0..32u32 {
        let identity = identity_from_mask(mask);

        let mut expected = String::new();
        if mask & 1 != 0 {
            expected.push_str("ssh://");
        }
        if mask & 2 != 0 {
            expected.push_str("u@");
        }
        if mask & 4 != 0 {
            expected.push_str("h");
        }
        if mask & 8 != 0 {
            expected.push_str(":22");
        }
        if mask & 16 != 0 {
            expected.push_str("/p");
        }

        assert_eq!(
            identity.canonical_string(),
            expected,
            "field combination {mask:#07b}"
        );
    }
}

#[test]
fn canonical_examples() {
    let identity = Identity {
        proto: Some("ssh".into()),
        user: Some("u".into()),
        host: Some("h".into()),
        ..Default::default()
    };
    assert_eq!(identity.canonical_string(), "ssh://u@h");

    let identity = Identity {
        proto: Some("gpg".into()),
        user: Some("alice".into()),
        host: Some("keys.example.org".into()),
        port: Some("443".into()),
        path: Some("/ring".into()),
        index: 0,
    };
    assert_eq!(identity.canonical_string(), "gpg://alice@keys.example.org:443/ring");
}

#[test]
fn derive_path_is_stable_across_calls() {
    let identity = Identity {
        proto: Some("ssh".into()),
        user: Some("u".into()),
        host: Some("h".into()),
        ..Default::default()
    };
    let canonical = identity.canonical_string();

    let first = DerivationPath::for_identity(&canonical, identity.index);
    for _ in 0..10 {
        assert_eq!(DerivationPath::for_identity(&canonical, identity.index), first);
    }
}

#[test]
fn derived_paths_are_fully_hardened() {
    for mask in 0..32u32 {
        let identity = identity_from_mask(mask);
        let path = DerivationPath::for_identity(&identity.canonical_string(), identity.index);
        assert_eq!(path.components().len(), 5);
        for component in path.components() {
            assert_ne!(component & HARDENED, 0, "unhardened component for mask {mask}");
        }
    }
}

#[test]
fn rotation_index_rotates_the_path() {
    let canonical = "ssh://u@h";
    let paths: Vec<_> = (0..4)
        .map(|index| DerivationPath::for_identity(canonical, index))
        .collect();
    for (i, a) in paths.iter().enumerate() {
        for b in &paths[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
