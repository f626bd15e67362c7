//! Citation extraction over realistic passages of decision text.

use std::collections::HashSet;

use bverfgex_verweis::{
    count_short_forms, find_citation_matches, find_citations, Reference, ReferenceChain,
};
use pretty_assertions::assert_eq;

const PASSAGE: &str = "Das Grundrecht schützt die Freiheit der Meinungsäußerung \
    (vgl. BVerfGE 7, 198 [208]; 61, 1 [7]). Die Abwägung ist Sache der \
    Fachgerichte (BVerfGE 85, 1 [13]; st. Rspr.). Anders liegt es, wenn die \
    Äußerung eine Formalbeleidigung ist (BVerfGE 93, 266 [294] m.w.N.; 7, 198).";

#[test]
fn test_passage_chains_in_document_order() {
    let chains = find_citations(PASSAGE);
    let printed: Vec<String> = chains.iter().map(ToString::to_string).collect();
    assert_eq!(
        printed,
        vec![
            "BVerfGE 7, 198 [208]; 61, 1 [7]",
            "BVerfGE 85, 1 [13]",
            "BVerfGE 93, 266 [294]",
        ]
    );
}

#[test]
fn test_passage_match_text_keeps_brackets() {
    let matches = find_citation_matches(PASSAGE);
    assert_eq!(matches[1].text, "BVerfGE 85, 1 [13]; st. Rspr.");
    for m in &matches {
        assert_eq!(&PASSAGE[m.span()], m.text);
    }
}

#[test]
fn test_short_form_counts_across_passage() {
    let chains = find_citations(PASSAGE);
    let counts = count_short_forms(&chains);
    assert_eq!(counts.get("BVerfGE7_198"), Some(&1));
    assert_eq!(counts.get("BVerfGE85_1"), Some(&1));
    assert_eq!(counts.values().sum::<usize>(), 4);
}

#[test]
fn test_references_deduplicate_in_set() {
    let text = "BVerfGE 58, 300 [336] und erneut BVerfGE 58, 300 [336]; 58, 300.";
    let unique: HashSet<Reference> = find_citations(text)
        .into_iter()
        .flat_map(ReferenceChain::into_vec)
        .collect();
    assert_eq!(unique.len(), 2);
}

#[test]
fn test_chain_yaml_round_trip_keeps_order() {
    let chain = find_citations("BVerfGE 37, 132 [140]; 50, 290 [339]; 52, 1 [31]")
        .into_iter()
        .next()
        .expect("one chain");

    let yaml = serde_yaml_ng::to_string(&chain).expect("serializes");
    let back: ReferenceChain = serde_yaml_ng::from_str(&yaml).expect("deserializes");
    assert_eq!(back, chain);
    assert_eq!(back.at(2).expect("third reference").pincite_clean(), Some("31"));
}

#[test]
fn test_longest_chain_is_limited() {
    let links: Vec<String> = (1..=25).map(|i| format!("{i}, {}", i * 10)).collect();
    let text = format!("BVerfGE {}", links.join("; "));
    let chains = find_citations(&text);
    assert_eq!(chains[0].len(), 20);
}
