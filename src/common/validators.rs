// src/common/validators.rs

use regex::Regex;
use std::sync::LazyLock;

/// Nome próprio: apenas letras (latinas ou cirílicas) e espaços.
pub static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё\s]+$").expect("regex de nome inválida"));

/// Telefone: "+" opcional, código de país (1 a 3 dígitos) e 10 dígitos.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{1,3}\d{10}$").expect("regex de telefone inválida"));

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nomes_validos() {
        assert!(is_valid_name("Maria"));
        assert!(is_valid_name("Maria da Silva"));
        assert!(is_valid_name("Иван Петров"));
    }

    #[test]
    fn nomes_invalidos() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Maria2"));
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name("Maria-Clara"));
    }

    #[test]
    fn telefones_validos() {
        // código de país + 10 dígitos, com ou sem "+"
        assert!(is_valid_phone("+71234567890"));
        assert!(is_valid_phone("551198765432"));
        assert!(is_valid_phone("+5511987654321"));
    }

    #[test]
    fn telefones_invalidos() {
        assert!(!is_valid_phone("123456789")); // curto demais
        assert!(!is_valid_phone("+7 123 456 78 90")); // espaços
        assert!(!is_valid_phone("abc1234567890"));
        assert!(!is_valid_phone("+71234567890123456")); // longo demais
    }
}
