// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANG: &str = "pt";

// Dicionário de mensagens por idioma. Chave desconhecida volta como a própria chave,
// assim o frontend ainda consegue traduzir do lado dele.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut messages = HashMap::new();
        messages.insert("pt", HashMap::from(PT));
        messages.insert("en", HashMap::from(EN));
        Self { messages }
    }

    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANG, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.messages.get(lang).and_then(|bundle| bundle.get(key)).copied()
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

const PT: [(&str, &str); 22] = [
    ("validationFailed", "Um ou mais campos são inválidos."),
    ("malformedRequest", "Requisição malformada."),
    ("anoMinCannotBeGreaterThanAnoMax", "O ano mínimo não pode ser maior que o ano máximo."),
    ("precoMinCannotBeGreaterThanPrecoMax", "O preço mínimo não pode ser maior que o preço máximo."),
    ("ordenacaoInvalida", "Critério de ordenação inválido."),
    ("cambioInvalido", "Tipo de câmbio inválido."),
    ("vehicleNotFound", "Veículo não encontrado."),
    ("veiculoNaoEncontrado", "O veículo informado não existe no catálogo."),
    ("contactNotFound", "Contato não encontrado."),
    ("captchaInvalido", "Verificação de captcha falhou."),
    ("termosPrivacidadeDevemSerAceitos", "Os termos de privacidade devem ser aceitos."),
    ("internalServerError", "Ocorreu um erro inesperado."),
    ("nomeCompletoDeveConterNomeESobrenome", "Informe nome e sobrenome."),
    ("telefoneInvalido", "Telefone inválido."),
    ("emailInvalido", "E-mail inválido."),
    ("mensagemInvalida", "A mensagem deve ter entre 10 e 1000 caracteres."),
    ("valorNegativo", "O valor não pode ser negativo."),
    ("tamanhoInvalido", "Tamanho inválido."),
    ("required", "Campo obrigatório."),
    ("anoInvalido", "O ano deve ser igual ou posterior a 1900."),
    ("paginaInvalida", "A página deve ser maior ou igual a 1."),
    ("itensPorPaginaInvalido", "Itens por página deve estar entre 1 e 100."),
];

const EN: [(&str, &str); 22] = [
    ("validationFailed", "One or more fields are invalid."),
    ("malformedRequest", "Malformed request."),
    ("anoMinCannotBeGreaterThanAnoMax", "Minimum year cannot be greater than maximum year."),
    ("precoMinCannotBeGreaterThanPrecoMax", "Minimum price cannot be greater than maximum price."),
    ("ordenacaoInvalida", "Invalid sort criteria."),
    ("cambioInvalido", "Invalid transmission type."),
    ("vehicleNotFound", "Vehicle not found."),
    ("veiculoNaoEncontrado", "The selected vehicle is not in the catalog."),
    ("contactNotFound", "Contact not found."),
    ("captchaInvalido", "Captcha verification failed."),
    ("termosPrivacidadeDevemSerAceitos", "Privacy terms must be accepted."),
    ("internalServerError", "An unexpected error occurred."),
    ("nomeCompletoDeveConterNomeESobrenome", "Please provide first and last name."),
    ("telefoneInvalido", "Invalid phone number."),
    ("emailInvalido", "Invalid e-mail."),
    ("mensagemInvalida", "Message must be between 10 and 1000 characters."),
    ("valorNegativo", "Value cannot be negative."),
    ("tamanhoInvalido", "Invalid length."),
    ("required", "Required field."),
    ("anoInvalido", "Year must be 1900 or later."),
    ("paginaInvalida", "Page must be at least 1."),
    ("itensPorPaginaInvalido", "Items per page must be between 1 and 100."),
];
