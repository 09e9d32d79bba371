//! Test Fixtures
//!
//! A handful of verses used as text units when exercising compiled queries.

/// (reference, text) pairs.
pub const VERSES: &[(&str, &str)] = &[
    ("Gen 1:1", "In the beginning God created the heaven and the earth."),
    ("Ps 119:105", "Thy word is a lamp unto my feet, and a light unto my path."),
    ("Isa 41:10", "Fear thou not; for I am with thee: be not dismayed; for I am thy God."),
    ("Dan 1:1", "In the third year of the reign of Jehoiakim king of Judah came Nebuchadnezzar king of Babylon unto Jerusalem, and besieged it."),
    ("Matt 6:33", "But seek ye first the kingdom of God, and his righteousness; and all these things shall be added unto you."),
    ("Matt 25:8", "And the foolish said unto the wise, Give us of your oil; for our lamps are gone out."),
    ("Eph 2:8", "For by grace are ye saved through faith; and that not of yourselves: it is the gift of God:"),
    ("Eph 2:9", "Not of works, lest any man should boast."),
    ("Rom 11:6", "And if by grace, then is it no more of works: otherwise grace is no more grace."),
    ("Rom 3:24", "Being justified freely by his grace through the redemption that is in Christ Jesus:"),
    ("1 Cor 13:13", "And now abideth faith, hope, charity, these three; but the greatest of these is charity."),
];

/// References of every verse the query matches, in corpus order.
pub fn matching_refs(query: &crate::core::query::GeneratedQuery) -> Vec<&'static str> {
    VERSES
        .iter()
        .filter(|(_, text)| query.pattern.is_match(text))
        .map(|(reference, _)| *reference)
        .collect()
}
