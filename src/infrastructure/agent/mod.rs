pub mod nutrition_agent;

pub use nutrition_agent::{AgentReply, NutritionAgent};
