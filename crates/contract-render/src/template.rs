//! Contract templates
//!
//! Two fixed layouts share the same six identity lines and summary. The
//! regular agreement carries the full deliverables clauses including the
//! restricted-category clause and a USD price; the campfire agreement has a
//! shorter deliverables section and an unsuffixed price.
//!
//! Field values are inserted verbatim.

use crate::count::resolve_count;
use crate::error::InputError;
use crate::input::ContractInput;

/// Tag in `contract_type` that selects the campfire agreement
pub const CAMPFIRE_TAG: &str = "campfire";

/// Which agreement layout to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Full agreement with the restricted-category clause
    Regular,
    /// Short agreement for campfire creators
    Campfire,
}

impl TemplateKind {
    /// Select by discriminant; anything but the campfire tag is regular
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(CAMPFIRE_TAG) => Self::Campfire,
            _ => Self::Regular,
        }
    }

    /// Blocks following the shared opening, in document order
    fn body(self, input: &ContractInput) -> Vec<Block> {
        match self {
            Self::Regular => regular_body(input),
            Self::Campfire => campfire_body(input),
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => f.write_str("regular"),
            Self::Campfire => f.write_str("campfire"),
        }
    }
}

/// One paragraph: a single run of text preceded by `breaks` line breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Run text, inserted verbatim
    pub text: String,
    /// Whether the run is bold
    pub bold: bool,
    /// Line breaks emitted before the text
    pub breaks: u8,
}

impl Block {
    /// Plain paragraph
    #[inline]
    #[must_use]
    pub fn line(text: impl Into<String>, breaks: u8) -> Self {
        Self {
            text: text.into(),
            bold: false,
            breaks,
        }
    }

    /// Bold section heading with one break
    #[inline]
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            breaks: 1,
        }
    }
}

/// Build the block sequence for `input`
///
/// # Errors
/// `InputError::InvalidCount` if `number_of_content` is non-numeric text
pub fn fill(input: &ContractInput) -> Result<Vec<Block>, InputError> {
    let count = resolve_count(input.number_of_content.as_ref())?;
    let kind = input.template_kind();

    let mut blocks = opening(input, &count);
    blocks.extend(kind.body(input));
    Ok(blocks)
}

/// Identity lines, summary and first deliverable, shared by both layouts
fn opening(input: &ContractInput, count: &str) -> Vec<Block> {
    vec![
        Block::line(format!("Artist/vendor name: {}", input.contractor_name), 1),
        Block::line(
            format!(
                "Name of person signing the contract (if not the artist/vendor): {}",
                input.signer_name
            ),
            1,
        ),
        Block::line(
            format!("Relationship to artist/vendor: {}", input.relationship_to_vendor),
            1,
        ),
        Block::line(format!("Address: {}", input.address), 1),
        Block::line(format!("Email address: {}", input.email), 1),
        Block::line(format!("Vendor account: {}", input.vendor_account), 2),
        Block::heading("Summary:"),
        Block::line(
            format!(
                "Vendor will create and provide to Adobe {count} video(s) with content to \
                 promote select Adobe products."
            ),
            2,
        ),
        Block::heading("Deliverables:"),
        Block::line(
            format!(
                "Vendor will provide Adobe with {count} pre-recorded video(s) that will be \
                 between 30 seconds and one minute in length that highlight Adobe products. \
                 Specific details, including Adobe product(s), will be selected by Adobe in \
                 writing. For each video, Vendor will (1) orally disclose the relationship \
                 between Vendor and Adobe and (2) include a clearly visible written overlay \
                 disclosing the relationship. Unless otherwise specified by Adobe in writing, \
                 each video's aspect ratio will be 9:16."
            ),
            1,
        ),
    ]
}

fn regular_body(input: &ContractInput) -> Vec<Block> {
    let mut blocks = vec![
        Block::line(POSTING_CLAUSE_REGULAR, 2),
        Block::line(USAGE_RIGHTS_CLAUSE, 2),
        Block::line(PRO_RATA_CLAUSE, 2),
        Block::line(RESTRICTED_CATEGORY_CLAUSE, 2),
    ];
    blocks.extend(schedule(input));
    blocks.push(Block::line(
        format!("Price and currency: ${} USD", input.amount),
        1,
    ));
    blocks.push(end_date(input));
    blocks
}

fn campfire_body(input: &ContractInput) -> Vec<Block> {
    let mut blocks = vec![Block::line(POSTING_CLAUSE_CAMPFIRE, 2)];
    blocks.extend(schedule(input));
    blocks.push(Block::line(
        format!("Price and currency: ${}", input.amount),
        1,
    ));
    blocks.push(end_date(input));
    blocks
}

fn schedule(input: &ContractInput) -> [Block; 2] {
    [
        Block::heading("Delivery Schedule:"),
        Block::line(
            format!(
                "Unless otherwise directed in writing by Adobe, {}",
                input.due_date
            ),
            2,
        ),
    ]
}

fn end_date(input: &ContractInput) -> Block {
    Block::line(format!("End Date: {}", input.end_date), 1)
}

const POSTING_CLAUSE_REGULAR: &str = "Vendor will post the video(s) on various social media \
    channels owned and controlled by the Vendor, which the parties will agree to in writing. \
    [The video(s) must be authenticated via the CreatorIQ website for analytic purposes, with a \
    30-day Ad code for all video created on applicable social media platforms provided to Adobe \
    to track performance.]";

const POSTING_CLAUSE_CAMPFIRE: &str = "Vendor will post the video(s) on various social media \
    channels owned and controlled by the Vendor, which the parties will agree to in writing. \
    The video(s) must include a 30-day Ad code for all video created on applicable social media \
    platforms provided to Adobe.";

const USAGE_RIGHTS_CLAUSE: &str = "For clarity, Adobe shall have the right to like, favorite, \
    share, repost, redistribute, syndicate, amplify (paid promotion or allow listing) or \
    otherwise use all video described hereunder in any manner enabled by the applicable \
    platform. Adobe can use the video and may redistribute to other Adobe owned accounts, \
    channels, and/or platforms. Vendor will allow 1 round of edits per video.";

const PRO_RATA_CLAUSE: &str = "In the event that all pre-recorded video(s) are not delivered, \
    Adobe will pay a pro-rated rate for content delivered in accordance with this Agreement.";

/// Exclusivity clause, regular agreement only
pub const RESTRICTED_CATEGORY_CLAUSE: &str = "Beginning on the Effective Date, and concluding \
    thirty (30) days after Vendor's publication of the video(s) with Adobe's authorization, \
    Vendor will not provide services on behalf of, appear or participate in any advertising, \
    publicity or promotion of, endorse, or authorize or permit the use of Vendor's Likeness in \
    connection with the following (the \"Restricted Category\"): (a) any software and online \
    creative development and cloud service companies (for clarity, the Restricted Category \
    includes, without limitation, Spline, Womp, Canva, Affinity, CapCut, Autodesk, DaVinci, \
    Final Cut Pro, Figma, Procreate, Capture One Pro); or (b) any product or service that in its \
    advertising or publicity denigrates Adobe or its products. For clarity, the aforementioned \
    does not preclude Vendor from merely appearing in any entertainment portion of any news, TV, \
    or film program or attending an event, regardless of sponsorship.";
