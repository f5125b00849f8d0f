use crate::{
    Pipeline,
    SanitizerOptions,
    errors::ScrubResult,
    rules::{
        CaseNormalizer,
        CharFilter,
        NumberFolder,
        Sentinel,
        TextRule,
        WhitespaceNormalizer,
        apply_rules,
    },
    vocab::{CommonVocab, RestrictedCorpus, VocabRestrictor, WordCounter, WordCounterOptions},
};

/// The sentence sanitizer.
///
/// Holds every compiled rule; build once through [`SanitizerOptions::build`]
/// and share. All operations are request-scoped: corpus-wide state is
/// rebuilt from the sentences passed to each call.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    options: SanitizerOptions,

    char_filter: CharFilter,
    whitespace: WhitespaceNormalizer,
    case: CaseNormalizer,
    numbers: NumberFolder,
    restrictor: VocabRestrictor,
}

impl Sanitizer {
    /// Validate `options` and compile every rule.
    pub fn new(options: SanitizerOptions) -> ScrubResult<Self> {
        let sentinel = Sentinel::new(options.sentinel.as_str())?;
        let restrictor = VocabRestrictor::new(&sentinel, &options.unk_symbol)?;

        Ok(Self {
            options,
            char_filter: CharFilter::new()?,
            whitespace: WhitespaceNormalizer::new()?,
            case: CaseNormalizer,
            numbers: NumberFolder::new()?,
            restrictor,
        })
    }

    /// The options this sanitizer was built with.
    pub fn options(&self) -> &SanitizerOptions {
        &self.options
    }

    /// The per-sentence rules of `pipeline`, in order.
    ///
    /// For a corpus-wide pipeline, these are the rules applied to each
    /// sentence before the corpus pass.
    pub fn sentence_rules(
        &self,
        pipeline: Pipeline,
    ) -> Vec<&dyn TextRule> {
        match pipeline {
            Pipeline::Hard => vec![
                &self.char_filter as &dyn TextRule,
                &self.whitespace,
                &self.case,
            ],
            Pipeline::Numbers | Pipeline::NumbersLimitCommonWords => {
                vec![&self.whitespace as &dyn TextRule, &self.numbers]
            }
        }
    }

    /// The `hard` pipeline: keep letters and dashes, collapse whitespace, lowercase.
    pub fn sanitize_hard(
        &self,
        sentence: &str,
    ) -> ScrubResult<String> {
        apply_rules(&self.sentence_rules(Pipeline::Hard), sentence)
    }

    /// The `numbers` pipeline: collapse whitespace, fold numbers.
    pub fn sanitize_numbers(
        &self,
        sentence: &str,
    ) -> ScrubResult<String> {
        apply_rules(&self.sentence_rules(Pipeline::Numbers), sentence)
    }

    /// Count the words of the `hard` sanitized form of every sentence.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, sentences)))]
    pub fn count_words<S>(
        &self,
        sentences: &[S],
    ) -> ScrubResult<WordCounter>
    where
        S: AsRef<str> + Sync,
    {
        let hard = self.map_sentences(sentences, |s| self.sanitize_hard(s))?;

        let mut counter = WordCounter::new(WordCounterOptions::default());
        counter.update_from_samples(&hard);
        Ok(counter)
    }

    /// Replace every word outside the `n_most_common` most frequent words
    /// of the corpus with the unknown-word marker.
    ///
    /// Sentences are not otherwise sanitized; see
    /// [`Sanitizer::sanitize_numbers_limit_commonwords`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, sentences)))]
    pub fn restrict_vocabulary<S>(
        &self,
        sentences: &[S],
        n_most_common: usize,
    ) -> ScrubResult<RestrictedCorpus>
    where
        S: AsRef<str> + Sync,
    {
        let counter = self.count_words(sentences)?;
        let vocab = CommonVocab::from_counter(&counter, n_most_common);
        log::debug!(
            "vocabulary: {} distinct words, keeping {}",
            counter.distinct_count(),
            vocab.len()
        );

        let rewritten = self.map_sentences(sentences, |s| self.restrictor.rewrite(s, &vocab))?;

        Ok(RestrictedCorpus {
            sentences: rewritten,
            report: *vocab.report(),
        })
    }

    /// The `numbers-limit-commonwords` pipeline.
    ///
    /// Applies [`Sanitizer::sanitize_numbers`] to every sentence, then
    /// [`Sanitizer::restrict_vocabulary`] across the whole corpus.
    ///
    /// ## Arguments
    /// * `sentences` - the whole corpus.
    /// * `n_most_common` - the vocabulary cap.
    /// * `verbose` - log the coverage diagnostics.
    pub fn sanitize_numbers_limit_commonwords<S>(
        &self,
        sentences: &[S],
        n_most_common: usize,
        verbose: bool,
    ) -> ScrubResult<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let numbered = self.map_sentences(sentences, |s| self.sanitize_numbers(s))?;
        let restricted = self.restrict_vocabulary(&numbered, n_most_common)?;

        if verbose {
            for line in restricted.report.to_string().lines() {
                log::info!("{line}");
            }
        }

        Ok(restricted.sentences)
    }

    /// Run `pipeline` on a single sentence.
    ///
    /// A corpus-wide pipeline treats the sentence as a corpus of one,
    /// using the configured cap and verbosity.
    pub fn sanitize(
        &self,
        pipeline: Pipeline,
        sentence: &str,
    ) -> ScrubResult<String> {
        if pipeline.is_corpus_wide() {
            let mut batch = self.sanitize_batch(pipeline, &[sentence])?;
            return Ok(batch.pop().unwrap_or_default());
        }
        apply_rules(&self.sentence_rules(pipeline), sentence)
    }

    /// Run `pipeline` on a batch of sentences, preserving order.
    ///
    /// Per-sentence pipelines treat each sentence independently;
    /// a corpus-wide pipeline runs across the batch jointly.
    pub fn sanitize_batch<S>(
        &self,
        pipeline: Pipeline,
        sentences: &[S],
    ) -> ScrubResult<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("running {pipeline} over {} sentences", sentences.len());
        match pipeline {
            Pipeline::NumbersLimitCommonWords => self.sanitize_numbers_limit_commonwords(
                sentences,
                self.options.n_most_common,
                self.options.verbose,
            ),
            pipeline => {
                let rules = self.sentence_rules(pipeline);
                self.map_sentences(sentences, |s| apply_rules(&rules, s))
            }
        }
    }

    /// Run `pipeline` on a sentence, then split the result on whitespace.
    pub fn sanitize_and_tokenize(
        &self,
        sentence: &str,
        pipeline: Pipeline,
    ) -> ScrubResult<Vec<String>> {
        Ok(split_whitespace(&self.sanitize(pipeline, sentence)?))
    }

    /// Run `pipeline` on a batch, then split each result on whitespace.
    pub fn sanitize_and_tokenize_batch<S>(
        &self,
        sentences: &[S],
        pipeline: Pipeline,
    ) -> ScrubResult<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self
            .sanitize_batch(pipeline, sentences)?
            .iter()
            .map(|s| split_whitespace(s))
            .collect())
    }

    fn map_sentences<S, F>(
        &self,
        sentences: &[S],
        f: F,
    ) -> ScrubResult<Vec<String>>
    where
        S: AsRef<str> + Sync,
        F: Fn(&str) -> ScrubResult<String> + Sync + Send,
    {
        #[cfg(feature = "rayon")]
        {
            if self.options.parallel {
                use rayon::prelude::*;

                return sentences.par_iter().map(|s| f(s.as_ref())).collect();
            }
        }

        sentences.iter().map(|s| f(s.as_ref())).collect()
    }
}

fn split_whitespace(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitizer() -> Sanitizer {
        Sanitizer::new(SanitizerOptions::default()).unwrap()
    }

    #[test]
    fn test_sanitize_hard() {
        let s = sanitizer();
        assert_eq!(s.sanitize_hard("Hello, World! 123").unwrap(), "hello world ");
        assert_eq!(s.sanitize_hard("  Well-Known_Fact  ").unwrap(), " well-known fact ");
        assert_eq!(s.sanitize_hard("").unwrap(), "");
    }

    #[test]
    fn test_sanitize_numbers() {
        let s = sanitizer();
        assert_eq!(s.sanitize_numbers("I have 10 cats").unwrap(), "I have N cats");
        assert_eq!(s.sanitize_numbers("value  21.3\tok").unwrap(), "value N ok");
        assert_eq!(s.sanitize_numbers("v1.2.3.4").unwrap(), "vN.N.N.N");
    }

    #[test]
    fn test_sentence_rules() {
        let s = sanitizer();
        let names = |p| {
            s.sentence_rules(p)
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(Pipeline::Hard), vec!["char-filter", "whitespace", "lowercase"]);
        assert_eq!(names(Pipeline::Numbers), vec!["whitespace", "numbers"]);
        assert_eq!(
            names(Pipeline::NumbersLimitCommonWords),
            vec!["whitespace", "numbers"]
        );
    }

    #[test]
    fn test_restrict_vocabulary() {
        let s = sanitizer();
        let corpus = ["the cat sat", "the dog sat", "a cat ran"];
        let restricted = s.restrict_vocabulary(&corpus, 2).unwrap();

        assert_eq!(
            restricted.sentences,
            vec!["the cat <unk>", "the <unk> <unk>", "<unk> cat <unk>"]
        );
        assert_eq!(restricted.report.covered_count, 4);
        assert_eq!(restricted.report.total_count, 9);
        assert_eq!(restricted.report.retained_words, 2);
        assert_eq!(restricted.report.distinct_words, 6);
    }

    #[test]
    fn test_sanitize_numbers_limit_commonwords() {
        let s = sanitizer();
        let corpus = [
            "Cats like 10 fish.",
            "Dogs like 2 bones.",
            "Birds like seeds, 3.5 of them.",
        ];
        let out = s.sanitize_numbers_limit_commonwords(&corpus, 2, true).unwrap();
        assert_eq!(
            out,
            vec![
                "<unk> like N <unk>.",
                "<unk> like N <unk>.",
                "<unk> like <unk>, N <unk> <unk>.",
            ]
        );
    }

    #[test]
    fn test_sanitize_single_sentence_corpus() {
        let s = Sanitizer::new(SanitizerOptions::default().with_n_most_common(1)).unwrap();
        assert_eq!(
            s.sanitize(Pipeline::NumbersLimitCommonWords, "a b a, c").unwrap(),
            "a <unk> a, <unk>"
        );
        assert_eq!(s.sanitize(Pipeline::NumbersLimitCommonWords, "").unwrap(), "");
    }

    #[test]
    fn test_sanitize_batch() {
        let s = sanitizer();
        let lines = vec!["Cats like 10 fish.".to_string(), "Dogs like 2 bones.".to_string()];
        assert_eq!(
            s.sanitize_batch(Pipeline::Numbers, &lines).unwrap(),
            vec!["Cats like N fish.", "Dogs like N bones."]
        );
        assert_eq!(
            s.sanitize_batch(Pipeline::Hard, &lines).unwrap(),
            vec!["cats like fish ", "dogs like bones "]
        );
        assert!(s.sanitize_batch::<&str>(Pipeline::Hard, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_sanitize_and_tokenize() {
        let s = sanitizer();
        assert_eq!(
            s.sanitize_and_tokenize("Hello, World! 123", Pipeline::Hard).unwrap(),
            vec!["hello", "world"]
        );
        assert_eq!(
            s.sanitize_and_tokenize_batch(&["I have 10 cats.", " x "], Pipeline::Numbers)
                .unwrap(),
            vec![vec!["I", "have", "N", "cats."], vec!["x"]]
        );
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_serial() {
        let serial = sanitizer();
        let parallel = Sanitizer::new(SanitizerOptions::default().with_parallel(true)).unwrap();

        let corpus: Vec<String> = (0..200)
            .map(|i| format!("Line {i}: the value is {}.{} (approx.)", i * 3, i % 7))
            .collect();

        for pipeline in [Pipeline::Hard, Pipeline::Numbers] {
            assert_eq!(
                serial.sanitize_batch(pipeline, &corpus).unwrap(),
                parallel.sanitize_batch(pipeline, &corpus).unwrap()
            );
        }
        assert_eq!(
            serial.restrict_vocabulary(&corpus, 5).unwrap(),
            parallel.restrict_vocabulary(&corpus, 5).unwrap()
        );
    }
}
