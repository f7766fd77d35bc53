use expert_core::model::{Model, OpenAiModel};

pub const GPT4_O_MINI: &str = "gpt-4o-mini";

pub(crate) fn map_model(model: &Model) -> &'static str {
    match model {
        Model::OpenAi(OpenAiModel::Gpt4oMini) => GPT4_O_MINI,
    }
}
