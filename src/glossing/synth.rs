use super::token::Token;
use serde::Serialize;

/// The two candidate orderings produced for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlossVariants {
    /// Interrogative moved to the end
    pub standard: String,
    /// Interrogative first, followed by the standard order minus its last element
    pub alternative: String,
}

/// Space-joined glosses. A carried comma is rendered after its gloss unless
/// that gloss ends the variant.
fn join(tokens: &[&Token]) -> String {
    let last = tokens.len().saturating_sub(1);
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            if t.comma_after && i < last {
                format!("{},", t.gloss)
            } else {
                t.gloss.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build both variants from gloss tokens, repositioning the first
/// interrogative. Performs no filtering.
///
/// Without an interrogative, both variants are the plain join. Both variants
/// always contain the same multiset of glosses.
pub fn synthesize(tokens: &[Token], is_question: impl Fn(&Token) -> bool) -> GlossVariants {
    let mut order: Vec<&Token> = tokens.iter().collect();

    let Some(position) = order.iter().position(|&t| is_question(t)) else {
        let joined = join(&order);
        return GlossVariants {
            standard: joined.clone(),
            alternative: joined,
        };
    };

    let question = order.remove(position);
    order.push(question);

    let mut alternative = Vec::with_capacity(order.len());
    alternative.push(question);
    alternative.extend_from_slice(&order[..order.len() - 1]);

    GlossVariants {
        standard: join(&order),
        alternative: join(&alternative),
    }
}
