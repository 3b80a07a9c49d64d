use std::sync::Arc;
use std::thread;

use tagcloud_core::config::{CloudConfig, TagCloudConfig, TextConfig};
use tagcloud_core::errors::TagCloudErrorCode;
use tagcloud_core::types::{AttributeSelector, Item, ItemId};
use tagcloud_core::CloudError;
use tagcloud_engine::{CloudRegistry, CloudTableRow};

fn items() -> Vec<Item> {
    vec![
        Item::new(1).with("name", "dna repair protein"),
        Item::new(2).with("name", "dna repair enzyme"),
        Item::new(3).with("name", "dna binding protein"),
        Item::new(4).with("name", "membrane transport protein"),
        Item::new(5).with("name", "axbxcxdxe"),
    ]
}

fn registry() -> CloudRegistry {
    CloudRegistry::new(TagCloudConfig {
        text: TextConfig {
            use_stop_words: Some(false),
            ..Default::default()
        },
        ..Default::default()
    })
}

fn name() -> AttributeSelector {
    AttributeSelector::named("name")
}

#[test]
fn networks_register_once_and_can_be_removed() {
    let reg = registry();
    reg.register_network("net", items()).unwrap();
    assert!(matches!(
        reg.register_network("net", items()),
        Err(CloudError::InvalidArgument { .. })
    ));
    assert_eq!(reg.networks(), vec!["net".to_string()]);

    reg.remove_network("net").unwrap();
    let err = reg.network("net").unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert!(reg.remove_network("net").is_err());
}

#[test]
fn registry_and_scopes_describe_themselves() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    net.create_cloud("Cloud_1", &[ItemId(1)], name()).unwrap();

    let scope = format!("{net:?}");
    assert!(scope.contains("\"net\""));
    assert!(scope.contains("Cloud_1"));
    assert!(format!("{reg:?}").contains("\"net\""));

    let missing = reg.network("other").unwrap_err();
    assert!(matches!(missing, CloudError::NetworkNotFound { .. }));
}

#[test]
fn scopes_are_independent() {
    let reg = registry();
    let a = reg.register_network("a", items()).unwrap();
    let b = reg.register_network("b", items()).unwrap();
    a.create_cloud("Cloud_1", &[ItemId(1)], name()).unwrap();
    b.create_cloud("Cloud_1", &[ItemId(2)], name()).unwrap();

    a.add_filter_word("repair");
    assert!(a.compute("Cloud_1").unwrap().word("repair").is_none());
    assert!(b.compute("Cloud_1").unwrap().word("repair").is_some());
}

#[test]
fn cloud_lifecycle() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    let first = net.next_cloud_name();
    net.create_cloud(&first, &[ItemId(1), ItemId(2)], name()).unwrap();
    let second = net.next_cloud_name();
    net.create_cloud(&second, &[ItemId(4)], name()).unwrap();
    assert_eq!(net.cloud_names(), vec!["Cloud_1".to_string(), "Cloud_2".to_string()]);

    assert!(matches!(
        net.create_cloud("", &[ItemId(1)], name()),
        Err(CloudError::InvalidArgument { .. })
    ));
    assert!(matches!(
        net.create_cloud("x", &[], name()),
        Err(CloudError::InvalidArgument { .. })
    ));

    net.delete_cloud(&first).unwrap();
    assert_eq!(net.cloud_count(), 1);
    assert_eq!(net.next_cloud_name(), "Cloud_1");
}

#[test]
fn shared_delimiters_retokenize_every_cloud() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    net.create_cloud("letters", &[ItemId(5)], name()).unwrap();
    assert_eq!(net.compute("letters").unwrap().len(), 1);

    assert!(net.add_delimiter("X").unwrap());
    let out = net.compute("letters").unwrap();
    let words: Vec<&str> = out.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["a", "b", "c", "d", "e"]);

    assert!(net.remove_delimiter("x"));
    assert_eq!(net.compute("letters").unwrap().len(), 1);
    assert!(net.add_delimiter("").is_err());
}

#[test]
fn out_of_range_parameters_keep_prior_values() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    net.create_cloud("c", &[ItemId(1)], name()).unwrap();
    net.with_cloud("c", |c| c.set_weight_factor(0.5)).unwrap();

    let err = net.with_cloud("c", |c| c.set_weight_factor(1.5)).unwrap_err();
    assert!(matches!(err, CloudError::OutOfRange { .. }));
    let weight = net.with_cloud("c", |c| Ok(c.params().weight_factor())).unwrap();
    assert_eq!(weight, 0.5);
}

#[test]
fn config_defaults_flow_into_new_clouds() {
    let reg = CloudRegistry::new(TagCloudConfig {
        cloud: CloudConfig {
            max_words: Some(2),
            min_font_size: Some(8),
            max_font_size: Some(30),
            ..Default::default()
        },
        text: TextConfig {
            use_stop_words: Some(false),
            extra_stop_words: vec!["protein".into()],
            delimiters: vec![],
        },
    });
    let net = reg.register_network("net", items()).unwrap();
    net.create_cloud("c", &[ItemId(1), ItemId(2)], name()).unwrap();
    let out = net.compute("c").unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.word("protein").is_none());
    assert_eq!(out.words[0].font_size, 30);
}

#[test]
fn export_produces_parallel_columns() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    net.create_cloud("c", &[ItemId(1), ItemId(2)], name()).unwrap();
    let row = net.export("c").unwrap();
    assert_eq!(row.name, "c");
    assert_eq!(row.len(), 4);
    assert_eq!(row.sequence, vec!["0", "1", "2", "3"]);
    assert_eq!(row.font_sizes[0], "64");
    assert_eq!(CloudTableRow::from_json(&row.to_json().unwrap()).unwrap(), row);

    assert_eq!(net.items_containing("c", "repair").unwrap(), vec![ItemId(1), ItemId(2)]);
    assert!(net.items_containing("c", "membrane").unwrap().is_empty());
}

#[test]
fn population_replacement_invalidates_background() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    net.create_cloud("c", &[ItemId(1)], name()).unwrap();
    let before = net.compute("c").unwrap();
    assert_eq!(before.background_total, 5);

    net.set_population(vec![Item::new(1).with("name", "dna repair protein")])
        .unwrap();
    let after = net.compute("c").unwrap();
    assert_eq!(after.background_total, 1);
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn compute_all_runs_every_cloud() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    for (i, id) in (1..=4).enumerate() {
        net.create_cloud(&format!("Cloud_{}", i + 1), &[ItemId(id)], name())
            .unwrap();
    }
    let results = net.compute_all();
    assert_eq!(results.len(), 4);
    let names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Cloud_1", "Cloud_2", "Cloud_3", "Cloud_4"]);
    assert!(results.iter().all(|(_, r)| r.is_ok()));

    // A second pass is served from cache.
    let again = net.compute_all();
    for ((_, a), (_, b)) in results.iter().zip(again.iter()) {
        assert!(Arc::ptr_eq(a.as_ref().unwrap(), b.as_ref().unwrap()));
    }
}

#[test]
fn concurrent_computes_of_one_cloud_agree() {
    let reg = registry();
    let net = reg.register_network("net", items()).unwrap();
    net.create_cloud("c", &[ItemId(1), ItemId(3)], name()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let net = Arc::clone(&net);
            thread::spawn(move || net.compute("c").unwrap().words.clone())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
