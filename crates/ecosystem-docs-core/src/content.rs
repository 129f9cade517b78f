//! Static prose for each section.
//!
//! Every function here is a content producer registered in the view
//! router's table. Titles come from the registry so they cannot drift.

use crate::page::{Block, Page};
use crate::registry;
use crate::router::RenderContext;

fn page(section_id: &'static str, subtitle: &'static str, blocks: Vec<Block>) -> Page {
    Page {
        section_id,
        title: registry::find_or_default(section_id).title,
        subtitle,
        blocks,
    }
}

pub fn overview(_ctx: &RenderContext) -> Page {
    page(
        "overview",
        "Four cooperating components for AI-assisted software development",
        vec![
            Block::Paragraph(
                "The AI Development Ecosystem is a set of four components that share one \
                 model of a codebase. Cortex reasons about code, Forge turns intent into \
                 changes, Sentinel checks those changes, and Atlas remembers what the team \
                 has learned. Each component is useful alone; together they close the loop \
                 from idea to reviewed, tested change.",
            ),
            Block::Heading("The four components"),
            Block::Card {
                title: "Cortex",
                tagline: "Reasoning engine",
                points: vec![
                    "Plans multi-step changes from natural-language goals",
                    "Explains unfamiliar code paths with cited sources",
                ],
            },
            Block::Card {
                title: "Forge",
                tagline: "Change synthesis",
                points: vec![
                    "Generates patches that follow project conventions",
                    "Keeps every edit reviewable as a small diff",
                ],
            },
            Block::Card {
                title: "Sentinel",
                tagline: "Verification",
                points: vec![
                    "Runs targeted tests and static checks on each patch",
                    "Flags behavior changes that lack test coverage",
                ],
            },
            Block::Card {
                title: "Atlas",
                tagline: "Shared knowledge",
                points: vec![
                    "Indexes design decisions, incidents, and conventions",
                    "Feeds relevant context to the other three components",
                ],
            },
            Block::Heading("Who it is for"),
            Block::Bullets(vec![
                "Teams that want assistance without giving up code review",
                "Maintainers of large codebases with tribal knowledge",
                "Platform groups standardizing tooling across repositories",
            ]),
        ],
    )
}

pub fn architecture(ctx: &RenderContext) -> Page {
    let mut blocks = vec![
        Block::Paragraph(
            "The ecosystem is arranged in three layers. The interface layer accepts \
             requests from editors, chat, and CI. The orchestration layer, owned by \
             Cortex, decomposes requests into tasks. The execution layer runs Forge and \
             Sentinel against a working copy, with Atlas available to every layer.",
        ),
        Block::Heading("Data flow"),
    ];
    if !ctx.compact {
        blocks.push(Block::Preformatted(
            "  request ──▶ Cortex ──▶ Forge ──▶ Sentinel ──▶ review\n\
             \x20                ▲          │          │\n\
             \x20                └──────── Atlas ◀─────┘",
        ));
    }
    blocks.extend([
        Block::Bullets(vec![
            "Requests carry a goal, a scope, and the caller's permissions",
            "Cortex emits a task plan; each task names its inputs and checks",
            "Forge produces candidate patches, never commits directly",
            "Sentinel returns a verdict with evidence for every patch",
            "Outcomes are written back to Atlas for future requests",
        ]),
        Block::Heading("Boundaries"),
        Block::Paragraph(
            "Components communicate only through versioned task and verdict messages. \
             No component reads another's internal state, which keeps each one \
             replaceable and testable in isolation.",
        ),
    ]);
    page(
        "architecture",
        "Layers, data flow, and component boundaries",
        blocks,
    )
}

pub fn components(_ctx: &RenderContext) -> Page {
    page(
        "components",
        "What each component does and what it does not",
        vec![
            Block::Heading("Cortex"),
            Block::Paragraph(
                "Cortex turns a goal into an ordered plan. It consults Atlas for relevant \
                 history, estimates the blast radius of each step, and asks for \
                 clarification when the goal is ambiguous.",
            ),
            Block::Bullets(vec![
                "Input: goal, repository snapshot, constraints",
                "Output: task plan with acceptance checks",
            ]),
            Block::Heading("Forge"),
            Block::Paragraph(
                "Forge executes one task at a time against a scratch working copy. It \
                 prefers small, convention-following edits and records why each edit was \
                 made.",
            ),
            Block::Bullets(vec![
                "Input: task, working copy",
                "Output: patch plus rationale",
            ]),
            Block::Heading("Sentinel"),
            Block::Paragraph(
                "Sentinel decides whether a patch is safe to propose. It selects tests \
                 affected by the change, runs linters, and compares behavior before and \
                 after.",
            ),
            Block::Bullets(vec![
                "Input: patch, test inventory",
                "Output: verdict (pass, fail, needs-human) with evidence",
            ]),
            Block::Heading("Atlas"),
            Block::Paragraph(
                "Atlas is the ecosystem's long-term memory. It stores design records, \
                 past incidents, and review feedback, and answers relevance queries from \
                 the other components.",
            ),
            Block::Bullets(vec![
                "Input: documents, verdicts, review comments",
                "Output: ranked context for a given task",
            ]),
        ],
    )
}

pub fn integration(_ctx: &RenderContext) -> Page {
    page(
        "integration",
        "Fitting the ecosystem into existing tools",
        vec![
            Block::Paragraph(
                "Every component exposes the same request/verdict API, so integrations \
                 are thin adapters. Three integration points cover most teams.",
            ),
            Block::Heading("Editor plugins"),
            Block::Paragraph(
                "Plugins send the current selection and goal to Cortex and present Forge's \
                 patches as inline suggestions. Nothing is applied without confirmation.",
            ),
            Block::Heading("Continuous integration"),
            Block::Paragraph(
                "A CI step runs Sentinel on every pull request and posts its verdict as a \
                 check. Teams can start here before adopting the other components.",
            ),
            Block::Heading("Webhooks and SDK"),
            Block::Bullets(vec![
                "Webhooks announce new verdicts and Atlas updates",
                "The SDK wraps the API with typed requests and retries",
                "Custom components can register as additional Sentinel checks",
            ]),
        ],
    )
}

pub fn workflows(_ctx: &RenderContext) -> Page {
    page(
        "workflows",
        "How the components combine in daily work",
        vec![
            Block::Heading("Prototyping"),
            Block::Paragraph(
                "A developer describes a feature; Cortex proposes a plan; Forge drafts the \
                 first patch. The developer iterates on the plan rather than on code.",
            ),
            Block::Heading("Review"),
            Block::Paragraph(
                "Reviewers see Sentinel's evidence next to the diff and Atlas's notes on \
                 related past changes, so discussion focuses on intent.",
            ),
            Block::Heading("Testing"),
            Block::Bullets(vec![
                "Sentinel picks affected tests first and widens on failure",
                "Missing coverage becomes a follow-up task for Forge",
            ]),
            Block::Heading("Shipping"),
            Block::Paragraph(
                "Merged changes and their verdicts flow into Atlas, where they inform the \
                 next plan Cortex produces.",
            ),
        ],
    )
}

pub fn roadmap(_ctx: &RenderContext) -> Page {
    page(
        "roadmap",
        "Where the ecosystem is heading",
        vec![
            Block::Heading("Near term"),
            Block::Bullets(vec![
                "Sentinel checks for dependency and license changes",
                "Atlas import from existing wikis and issue trackers",
            ]),
            Block::Heading("Mid term"),
            Block::Bullets(vec![
                "Multi-repository plans in Cortex",
                "Forge support for coordinated schema and code migrations",
            ]),
            Block::Heading("Research"),
            Block::Paragraph(
                "Open questions include measuring plan quality before execution and \
                 letting teams tune how much autonomy each component has.",
            ),
        ],
    )
}
