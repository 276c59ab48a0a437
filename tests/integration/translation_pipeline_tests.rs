/*!
 * End-to-end properties of the rewrite pipeline
 */

use plainspeak::rewrite::render::{GENERIC_TIP, NEWBIE_TIPS};
use plainspeak::rewrite::segment::{char_len, simplify_text, PLAIN_LINE_LIMIT};
use plainspeak::rewrite::SAMPLE_INPUTS;
use plainspeak::{translate, translate_text, QuickOptions, ReadingLevel, TranslateOptions};

fn all_option_sets() -> Vec<TranslateOptions> {
    let mut sets = Vec::new();
    for keep_terms in [true, false] {
        for highlight in [true, false] {
            for level in [ReadingLevel::Simple, ReadingLevel::Normal] {
                sets.push(TranslateOptions::new(keep_terms, highlight, level));
            }
        }
    }
    sets
}

fn is_tip(line: &str) -> bool {
    line == GENERIC_TIP || NEWBIE_TIPS.iter().any(|(_, tip)| *tip == line)
}

#[test]
fn test_translate_withAnyInput_shouldAppendAtLeastOneTip() {
    let mut inputs: Vec<&str> = SAMPLE_INPUTS.to_vec();
    inputs.extend([
        "",
        "   ",
        "!!!",
        "gas",
        "the bridge fee and the price risk of a rug pull",
        "“curly” quotes and ‘single’ ones",
        "ガス代 is gas in Japanese",
    ]);

    for options in all_option_sets() {
        for input in &inputs {
            let result = translate_text(input, &options);

            assert!(result.newbie.starts_with(&result.plain));
            let tips: Vec<&str> = result.newbie[result.plain.len()..]
                .split("\n\n")
                .filter(|block| !block.is_empty())
                .collect();
            assert!((1..=2).contains(&tips.len()), "tips for {:?}: {:?}", input, tips);
            assert!(tips.iter().all(|tip| is_tip(tip)), "unexpected tip for {:?}", input);
        }
    }
}

#[test]
fn test_translate_withKeepTerms_shouldKeepGlossaryTermsInThread() {
    let input = "The whale moved funds over the bridge to a dex";
    let options = TranslateOptions::new(true, false, ReadingLevel::Normal);

    let result = translate_text(input, &options);
    let thread = result.x_ready.to_lowercase();

    for term in ["whale", "bridge", "dex"] {
        assert_eq!(thread.matches(term).count(), 1, "term {} in {:?}", term, thread);
    }
    assert!(result.meta.used_two_layer);
    assert!(result.meta.used_guardrail);
}

#[test]
fn test_translate_withGasoline_shouldNotSubstituteGas() {
    let options = TranslateOptions::new(false, true, ReadingLevel::Simple);

    let result = translate_text("gasoline prices", &options);

    assert_eq!(result.plain, "gasoline prices");
    assert_eq!(result.x_ready, "gasoline prices");
    assert!(!result.meta.used_two_layer);
}

#[test]
fn test_translate_withGasFee_shouldSubstituteLongestTermOnce() {
    let options = TranslateOptions::new(false, true, ReadingLevel::Simple);

    let result = translate_text("the gas fee is high", &options);

    assert_eq!(result.plain.matches("[[H]]").count(), 1);
    assert!(result
        .plain
        .starts_with("the [[H]]the fee paid to process a transaction[[/H]] is high"));
    assert!(!result.plain.contains("fee is high"));
}

#[test]
fn test_translate_withTwoConcepts_shouldExplainMechanism() {
    let options = TranslateOptions::new(true, true, ReadingLevel::Normal);

    let result = translate_text("Account abstraction improves wallet UX", &options);
    let (claim, mechanism) = result
        .plain
        .split_once(". ")
        .expect("plain output should hold two sentences");

    assert!(claim.starts_with("Typically, this means"));
    assert!(mechanism.starts_with("It works by improving"));
    assert!(result.meta.used_two_layer);
}

#[test]
fn test_translate_withRollup_shouldHedgeFirstSentence() {
    for options in all_option_sets() {
        let result = translate_text("Modular rollup with shared sequencer design", &options);

        assert!(result.plain.starts_with("Typically, this means"), "{:?}", result.plain);
        assert!(result.meta.used_guardrail);
    }
}

#[test]
fn test_translate_withIdioms_shouldRewriteRegardlessOfCaseAndPunctuation() {
    for input in ["gm, wagmi", "GM! WAGMI!", "(gm) \"wagmi\""] {
        let result = translate_text(input, &TranslateOptions::default());
        let plain = result.plain.to_lowercase();

        assert!(plain.contains("good morning"), "{:?}", plain);
        assert!(plain.contains("we are going to make it"), "{:?}", plain);
    }
}

#[test]
fn test_simplifyText_withSimpleLevel_shouldRespectLineBudget() {
    let long_input = "The network keeps every transfer in order for its users, and the fees stay low \
        because the batches are large and the proofs are checked once, while the wallets talk to a \
        single endpoint that never goes down during busy hours. Extraordinarilylongunbreakablewordthatkeepsgoingandgoingwellpastthebudgetforasingleline";

    let lines = simplify_text(long_input, ReadingLevel::Simple);

    assert!(lines.len() > 2);
    for line in &lines {
        let fits = char_len(line) <= PLAIN_LINE_LIMIT;
        let single_word = !line.contains(' ');
        assert!(fits || single_word, "line too long: {:?}", line);
    }
}

#[test]
fn test_translate_withSimpleLevel_shouldKeepPlainLinesWithinBudget() {
    let options = TranslateOptions::new(false, false, ReadingLevel::Simple);

    for sample in SAMPLE_INPUTS {
        let result = translate_text(sample, &options);
        assert!(!result.plain.contains("[[H]]"));
        assert!(!result.x_ready.contains("[[H]]"));
        for line in result.x_ready.split("\n\n") {
            assert!(char_len(line) <= 80 || !line.contains(' '), "thread line too long: {:?}", line);
        }
    }
}

#[test]
fn test_translate_quickEntryPoint_shouldMatchExplicitOptionsWithHighlight() {
    let quick = QuickOptions { reading_level: ReadingLevel::Simple, keep_key_terms: false };
    let explicit = TranslateOptions::new(false, true, ReadingLevel::Simple);

    for sample in SAMPLE_INPUTS {
        assert_eq!(translate(sample, &quick), translate_text(sample, &explicit));
    }
}

#[test]
fn test_translate_withSignatureSentence_shouldUseCannedRewrite() {
    let options = TranslateOptions::new(false, false, ReadingLevel::Normal);

    let result = translate_text(
        "ZK-native execution layer with parallelized prover architecture",
        &options,
    );

    assert!(result.plain.contains("process many private transactions at once"));
    assert!(result.plain.contains("running proofs in parallel"));
}
