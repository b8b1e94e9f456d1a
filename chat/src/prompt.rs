use crate::config::FileReference;

pub const DEFAULT_SEPARATOR: &str = " The user asked this: ";
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

pub const SYSTEM_PROMPT_TEMPLATE: &str = "
You are a helpful and professional banking assistant named BankBot. 
Your role is to provide clear, accurate information about banking services and assist customers with their queries.

Please follow these guidelines:
- Be polite, concise, and helpful in your responses
- Use professional but friendly language
- When you don't know an answer, acknowledge it and offer to connect the customer with a human representative
- Never share sensitive customer information or ask for PINs, passwords, or full card numbers
- For account-specific questions, explain the steps to find the information rather than pretending to have access to accounts
- Always prioritize security and privacy in your responses
- Never use markdown formatting in your responses, as you are answering in plain text

You work for Bank1, which offers checking accounts, savings accounts, loans, credit cards, and investment services.

The website URL is www.banka-1.si.raf.edu.rs
The conversation between you and the user is zero shot, so make sure your answer contains all relevant information.
NEVER! tell the user to contact bank representatives, the support team, or any other human, rather try to provide all
the information you can, instead say that don't have all the information needed to answer the question.
{context}";

/// Payload handed to a provider: the composed text plus any startup attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub attachments: Vec<FileReference>,
}

#[derive(Debug, Clone)]
pub struct PromptComposer {
    system_prompt: String,
    separator: String,
}

impl PromptComposer {
    /// Interpolates `context` into the system prompt once; requests never touch the template again.
    pub fn new(context: Option<&str>, separator: impl Into<String>) -> Self {
        let section = context
            .map(|context| {
                format!("\nUse the following information about Bank1 when answering:\n{context}\n")
            })
            .unwrap_or_default();

        Self {
            system_prompt: SYSTEM_PROMPT_TEMPLATE.replace(CONTEXT_PLACEHOLDER, &section),
            separator: separator.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn compose(&self, message: &str) -> String {
        let mut payload =
            String::with_capacity(self.system_prompt.len() + self.separator.len() + message.len());
        payload.push_str(&self.system_prompt);
        payload.push_str(&self.separator);
        payload.push_str(message);
        payload
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(None, DEFAULT_SEPARATOR)
    }
}
