//! The closed set of expert personas and the prompt they produce.
//!
//! Each [`Persona`] variant indexes into a static table of
//! [`PersonaProfile`]s holding its form key, radio label and fixed system
//! instruction. Nothing here matches on label text.
//!
//! ```rust
//! use expert_prompt::persona::{Persona, build_prompt};
//! use expert_core::generic::GenericRole;
//!
//! let prompt = build_prompt(Persona::TravelPlanner, "2泊3日の旅行プラン作って");
//! assert_eq!(prompt[0].role, GenericRole::System);
//! assert_eq!(prompt[0].text(), Some(Persona::TravelPlanner.instruction()));
//! assert_eq!(prompt[1].text(), Some("2泊3日の旅行プラン作って"));
//! ```

use expert_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

use crate::{chain::PromptChain, fragment::StaticFragment};

/// Expert role selected on the form.
///
/// The discriminant is the row in the profile table, so keep the variant
/// order and the table order identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Persona {
    #[default]
    CareerCoach = 0,
    TravelPlanner = 1,
}

/// Static data attached to a [`Persona`].
#[derive(Debug)]
pub struct PersonaProfile {
    pub persona: Persona,
    /// Stable value used in the HTML form.
    pub key: &'static str,
    /// Human-readable radio label.
    pub label: &'static str,
    /// System instruction sent ahead of the user's question.
    pub instruction: &'static str,
}

static PROFILES: [PersonaProfile; 2] = [
    PersonaProfile {
        persona: Persona::CareerCoach,
        key: "career_coach",
        label: "A: キャリアコーチ",
        instruction: concat!(
            "あなたは経験豊富なキャリアコーチです。",
            "ユーザーの状況を整理し、現実的で実行可能なアドバイスを日本語で提供してください。",
            "箇条書きを多めに、必要なら追加質問を1つだけ添えてください。",
        ),
    },
    PersonaProfile {
        persona: Persona::TravelPlanner,
        key: "travel_planner",
        label: "B: 旅行プランナー",
        instruction: concat!(
            "あなたはプロの旅行プランナーです。",
            "ユーザーの希望に沿った旅行プラン（行程・移動・予算感・注意点）を日本語で提案してください。",
            "見出し＋箇条書き中心で、必要なら追加質問を1つだけ添えてください。",
        ),
    },
];

impl Persona {
    /// Every persona in display order.
    pub const ALL: [Persona; 2] = [Persona::CareerCoach, Persona::TravelPlanner];

    pub fn profile(self) -> &'static PersonaProfile {
        &PROFILES[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.profile().key
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    pub fn instruction(self) -> &'static str {
        self.profile().instruction
    }

    /// Reverse lookup from a form key. Labels are not accepted.
    pub fn from_key(key: &str) -> Option<Persona> {
        PROFILES
            .iter()
            .find(|profile| profile.key == key)
            .map(|profile| profile.persona)
    }
}

/// The two-message prompt for one submission: persona instruction, then the
/// question verbatim.
pub struct PersonaPrompt<'a> {
    persona: Persona,
    question: &'a str,
}

impl<'a> PersonaPrompt<'a> {
    pub fn new(persona: Persona, question: &'a str) -> Self {
        Self { persona, question }
    }
}

impl IntoPrompt for PersonaPrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::from(self.persona.instruction()))
            .with(StaticFragment::new(self.question, GenericRole::User))
            .build()
    }
}

/// Build the ordered `(system, user)` prompt for `persona` and `question`.
///
/// Pure: no trimming, escaping or length checks are applied to `question`.
pub fn build_prompt(persona: Persona, question: &str) -> Vec<GenericMessage> {
    PersonaPrompt::new(persona, question).into_prompt()
}
