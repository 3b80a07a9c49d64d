use proptest::prelude::*;
use tagcloud_core::types::{AttributeSelector, Item, ItemId, Population};
use tagcloud_engine::cloud::{run, CloudRequest};
use tagcloud_engine::cluster::{ClusterBuilder, CooccurrenceIndex};
use tagcloud_engine::scoring::frequency;
use tagcloud_engine::{CloudParams, FontSizeMapper, WordDelimiters, WordFilter};

fn item_texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}( [a-e]{1,2}){0,4}", 1..12)
}

fn population(texts: &[String]) -> Population {
    Population::new(
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Item::new(i as u64).with("name", t.as_str()))
            .collect(),
    )
    .unwrap()
}

fn selection(len: usize, mask: &[bool]) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = (0..len as u64)
        .filter(|&i| mask.get(i as usize).copied().unwrap_or(false))
        .map(ItemId)
        .collect();
    if ids.is_empty() {
        ids.push(ItemId(0));
    }
    ids
}

fn params() -> CloudParams {
    CloudParams::new(AttributeSelector::named("name")).unwrap()
}

proptest! {
    #[test]
    fn selected_counts_bounded_by_background(
        texts in item_texts(),
        mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let pop = population(&texts);
        let ids = selection(texts.len(), &mask);
        let selector = AttributeSelector::named("name");
        let filter = WordFilter::new();
        let delims = WordDelimiters::new();

        let background = frequency::count(pop.items(), &selector, &filter, &delims).unwrap().table;
        let items = pop.resolve(&ids).unwrap();
        let selected = frequency::count(items.iter().copied(), &selector, &filter, &delims)
            .unwrap()
            .table;
        for (word, count) in selected.counts() {
            prop_assert!(count <= background.count(word), "{}", word);
        }
    }

    #[test]
    fn pipeline_is_idempotent(
        texts in item_texts(),
        mask in prop::collection::vec(any::<bool>(), 12),
        weight in 0.0f64..=1.0,
    ) {
        let pop = population(&texts);
        let ids = selection(texts.len(), &mask);
        let mut p = params();
        p.set_weight_factor(weight).unwrap();
        p.set_cluster_cutoff(0.3).unwrap();
        let filter = WordFilter::new();
        let delims = WordDelimiters::new();
        let request = CloudRequest {
            population: &pop,
            selection: &ids,
            params: &p,
            filter: &filter,
            delimiters: &delims,
        };
        let a = run(&request).unwrap();
        let b = run(&request).unwrap();
        prop_assert_eq!(&a.words, &b.words);
    }

    #[test]
    fn filtered_word_disappears_and_others_keep_counts(
        texts in item_texts(),
        victim in "[a-e]{1,2}",
    ) {
        let pop = population(&texts);
        let ids: Vec<ItemId> = pop.items().iter().map(|i| i.id).collect();
        let p = params();
        let delims = WordDelimiters::new();
        let unfiltered = WordFilter::new();
        let mut filtered = WordFilter::new();
        filtered.add(&victim);

        let before = run(&CloudRequest {
            population: &pop,
            selection: &ids,
            params: &p,
            filter: &unfiltered,
            delimiters: &delims,
        })
        .unwrap();
        let after = run(&CloudRequest {
            population: &pop,
            selection: &ids,
            params: &p,
            filter: &filtered,
            delimiters: &delims,
        })
        .unwrap();

        prop_assert!(after.word(&victim).is_none());
        let expected = before.words.iter().filter(|w| w.word != victim).count();
        prop_assert_eq!(after.len(), expected);
        for word in &after.words {
            prop_assert_eq!(
                Some(word.selected_count),
                before.word(&word.word).map(|w| w.selected_count)
            );
        }
    }

    #[test]
    fn font_is_monotone_in_ratio(
        lo in 0.01f64..10.0,
        span in 0.0f64..10.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        min_font in 1u32..40,
        extra in 0u32..60,
    ) {
        let hi = lo + span;
        let mapper = FontSizeMapper::new(lo, hi, min_font, min_font + extra).unwrap();
        let (x, y) = if a <= b { (a, b) } else { (b, a) };
        let fx = mapper.font_size(lo + x * span);
        let fy = mapper.font_size(lo + y * span);
        prop_assert!(fx <= fy);
        if span > 0.0 {
            prop_assert!(fx >= min_font && fy <= min_font + extra);
        }
    }

    #[test]
    fn cutoff_above_every_pair_merges_nothing(texts in item_texts()) {
        let pop = population(&texts);
        let table = frequency::count(
            pop.items(),
            &AttributeSelector::named("name"),
            &WordFilter::new(),
            &WordDelimiters::new(),
        )
        .unwrap()
        .table;
        let index = CooccurrenceIndex::from_table(&table);
        let mut builder = ClusterBuilder::new();
        builder.initialize(&index);
        let cutoff = index.max_probability().unwrap_or(0.0) + 1e-9;
        prop_assert_eq!(builder.cluster_data(cutoff).unwrap(), 0);

        // Dropping to zero merges every co-occurring pair transitively.
        builder.cluster_data(0.0).unwrap();
        let ids = builder.cluster_ids(table.words().iter().map(String::as_str));
        for pair in index.pairs() {
            let a = &index.words()[pair.first];
            let b = &index.words()[pair.second];
            prop_assert!(ids[a] != 0);
            prop_assert_eq!(ids[a], ids[b]);
        }
    }
}
