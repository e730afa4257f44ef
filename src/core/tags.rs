// ShowReg - core/tags.rs
//
// Tag-sheet layout builder. Pure grid arithmetic from the canonical ranked
// sequence to paginated 2x4 card pages; PDF rendering lives in app/pdf.rs.

use crate::core::rank::RankedRecord;
use crate::util::constants;

/// A paginated tag-sheet layout: one page per full or partial group of
/// eight cards, filled in row-major order.
#[derive(Debug, Clone, Default)]
pub struct TagSheet {
    pub pages: Vec<TagPage>,
}

/// One physical page of up to eight cards. Trailing empty cells on the last
/// page are simply absent; they are left blank, not rendered.
#[derive(Debug, Clone)]
pub struct TagPage {
    pub cards: Vec<TagCard>,
}

/// Render-ready content of a single number-tag card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCard {
    /// Global sequence number, identical to the catalogue's.
    pub sequence: usize,

    /// Top-right annotation: the record's age category.
    pub age_label: &'static str,

    /// Detail line 1: the cat's name.
    pub name: String,

    /// Detail line 2: breed and colour, joined.
    pub breed_color: String,

    /// Detail line 3: sex.
    pub sex: String,

    /// Grid column (0-based) of this card on its page.
    pub column: usize,

    /// Grid row (0-based) of this card on its page.
    pub row: usize,
}

/// Truncate a card value to the fixed character budget, appending an
/// ellipsis marker instead of overflowing the card bounds.
pub fn truncate(value: &str, budget: usize) -> String {
    if value.chars().count() <= budget {
        return value.to_string();
    }
    let keep = budget.saturating_sub(constants::TAG_ELLIPSIS.chars().count());
    let mut out: String = value.chars().take(keep).collect();
    out.push_str(constants::TAG_ELLIPSIS);
    out
}

/// Lay out the ranked sequence into paginated card pages.
///
/// Cards fill in row-major order: column advances first, wrapping to the
/// next row, then to a new page after eight cards. Page count is
/// ceil(N / 8); the last page holds the remainder.
pub fn build_tag_sheets(ranked: &[RankedRecord]) -> TagSheet {
    let mut pages: Vec<TagPage> = Vec::new();

    for (i, entry) in ranked.iter().enumerate() {
        let slot = i % constants::TAGS_PER_PAGE;
        if slot == 0 {
            pages.push(TagPage { cards: Vec::new() });
        }

        let r = &entry.record;
        let card = TagCard {
            sequence: entry.seq,
            age_label: r.age.label(),
            name: truncate(&r.pet_name, constants::TAG_FIELD_MAX_CHARS),
            breed_color: truncate(
                &format!("{} / {}", r.breed, r.color),
                constants::TAG_FIELD_MAX_CHARS,
            ),
            sex: r.sex.label().to_string(),
            column: slot % constants::TAG_GRID_COLUMNS,
            row: slot / constants::TAG_GRID_COLUMNS,
        };
        pages.last_mut().expect("page pushed above").cards.push(card);
    }

    TagSheet { pages }
}

// =============================================================================
// Unit tests
// =============================================================================
