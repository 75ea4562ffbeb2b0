//! Relation -> sentence template table.
//!
//! Keys are relation names without the `/r/` namespace. Every template has
//! exactly two placeholders: `{0}` for the subject and `{1}` for the object
//! of the assertion in its recorded direction.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Relation name -> template, built once per process.
pub static RELATION_TEMPLATES: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| TEMPLATES.iter().copied().collect());

/// Template for a namespace-stripped relation name.
#[must_use]
pub fn relation_template(relation: &str) -> Option<&'static str> {
    RELATION_TEMPLATES.get(relation).copied()
}

const TEMPLATES: &[(&str, &str)] = &[
    ("RelatedTo", "{0} is like {1}"),
    ("ExternalURL", "{0} is described at the following URL {1}"),
    ("FormOf", "{0} is a form of the word {1}"),
    ("IsA", "{0} is {1}"),
    ("PartOf", "{1} has {0}"),
    ("HasA", "{0} has {1}"),
    ("UsedFor", "{0} is used for {1}"),
    ("CapableOf", "{0} can {1}"),
    ("AtLocation", "You are likely to find {0} in {1}"),
    ("Causes", "Sometimes {0} causes {1}"),
    ("HasSubevent", "Something you might do while {0} is {1}"),
    ("HasFirstSubevent", "the first thing you do when you {0} is {1}"),
    ("HasLastSubevent", "the last thing you do when you {0} is {1}"),
    ("HasPrerequisite", "something you need to do before you {0} is {1}"),
    ("HasProperty", "{0} is {1}"),
    ("MotivatedByGoal", "You would {0} because you want to {1}"),
    ("ObstructedBy", "{0} can be prevented by {1}"),
    ("Desires", "{0} wants {1}"),
    ("CreatedBy", "{1} is created by {0}"),
    ("Synonyms", "{0} and {1} have similar meanings"),
    ("Synonym", "{0} and {1} have similar meanings"),
    ("Antonym", "{0} is the opposite of {1}"),
    ("DistinctFrom", "it cannot be both {0} and {1}"),
    ("DerivedFrom", "the word {0} is derived from the word {1}"),
    ("SymbolOf", "{0} is a symbol of {1}"),
    ("DefinedAs", "{0} is defined as {1}"),
    ("Entails", "if {0} is happening, {1} is also happening"),
    ("MannerOf", "{0} is a specific way of doing {1}"),
    ("LocatedNear", "{0} is located near {1}"),
    ("dbpedia", "{0} is conceptually related to {1}"),
    ("SimlarTo", "{0} is similar to {1}"),
    ("EtymologicallyRelatedTo", "the word {0} and the word {1} have the same origin"),
    ("EtymologicallyDerivedFrom", "the word {0} comes from the word {1}"),
    ("CausesDesire", "{0} makes people want {1}"),
    ("MadeOf", "{0} is made of {1}"),
    ("ReceivesAction", "{0} can be {1}"),
    ("InstanceOf", "{0} is an example of {1}"),
    ("NotDesires", "{0} does not want {1}"),
    ("NotUsedFor", "{0} is not used for {1}"),
    ("NotCapableOf", "{0} is not capable of {1}"),
    ("NotHasProperty", "{0} does not have the property of {1}"),
    ("NotMadeOf", "{0} is not made of {1}"),
    ("NotIsA", "{0} is not {1}"),
    ("HasContext", "{0} is in the context of {1}"),
    ("SimilarTo", "{0} is similar to {1}"),
    // the dbpedia/capital assertions are recorded as country -> capital
    ("dbpedia/capital", "{1} is the capital of {0}"),
    ("dbpedia/field", "{0} is in the field of {1}"),
    ("dbpedia/genre", "the works of {0} are mainly {1}"),
    ("dbpedia/genus", "{1} is the genus of {0}"),
    ("dbpedia/influencedBy", "{0} was influenced by {1}"),
    ("dbpedia/knownFor", "{0} is known for {1}"),
    ("dbpedia/language", "{1} is the language of {0}"),
    ("dbpedia/leader", "{1} is the leader of {0}"),
    ("dbpedia/occupation", "{0}'s occupation is {1}"),
    ("dbpedia/product", "{0} produces {1}"),
];

/// Substitute `{0}` and `{1}` in a single pass, so placeholder-like text
/// inside the names is left alone.
pub(crate) fn fill_template(template: &str, subject: &str, object: &str) -> String {
    let mut out = String::with_capacity(template.len() + subject.len() + object.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if let Some(after) = tail.strip_prefix("{0}") {
            out.push_str(subject);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{1}") {
            out.push_str(object);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
