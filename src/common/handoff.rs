// src/common/handoff.rs

use dashmap::DashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Qual identificador está sendo repassado entre telas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandoffKey {
    ProductId,
    LeadId,
}

/// Tempo de vida padrão de um slot: o usuário é redirecionado na hora,
/// então 5 segundos bastam.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Slot efêmero usado pelas ações de "transferência": uma ação grava um
/// id, o formulário de criação seguinte o consome para se pré-preencher.
///
/// O slot é escopado por usuário autenticado, para dois usuários não
/// atropelarem o repasse um do outro. O mesmo usuário gravando duas
/// vezes segue na regra de "último escreve, vence".
#[derive(Debug)]
pub struct HandoffCache {
    ttl: Duration,
    slots: DashMap<(Uuid, HandoffKey), (Uuid, Instant)>,
}

impl HandoffCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: DashMap::new(),
        }
    }

    /// Grava um identificador para o usuário; sobrescreve o anterior.
    pub fn stage(&self, user_id: Uuid, key: HandoffKey, id: Uuid) {
        self.slots.insert((user_id, key), (id, Instant::now()));
    }

    /// Lê e remove o slot. Devolve `None` se nada foi gravado, se o slot
    /// já foi consumido ou se o TTL expirou. Expirar não é erro: o
    /// formulário simplesmente abre vazio.
    pub fn consume(&self, user_id: Uuid, key: HandoffKey) -> Option<Uuid> {
        let (_, (id, staged_at)) = self.slots.remove(&(user_id, key))?;
        if staged_at.elapsed() > self.ttl {
            return None;
        }
        Some(id)
    }
}

impl Default for HandoffCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consome_exatamente_uma_vez() {
        let cache = HandoffCache::default();
        let user = Uuid::new_v4();
        let id = Uuid::new_v4();

        cache.stage(user, HandoffKey::ProductId, id);
        assert_eq!(cache.consume(user, HandoffKey::ProductId), Some(id));
        // segundo consumo volta vazio
        assert_eq!(cache.consume(user, HandoffKey::ProductId), None);
    }

    #[test]
    fn ttl_expirado_volta_vazio() {
        let cache = HandoffCache::new(Duration::ZERO);
        let user = Uuid::new_v4();

        cache.stage(user, HandoffKey::LeadId, Uuid::new_v4());
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.consume(user, HandoffKey::LeadId), None);
    }

    #[test]
    fn ultimo_stage_vence() {
        let cache = HandoffCache::default();
        let user = Uuid::new_v4();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        cache.stage(user, HandoffKey::LeadId, first);
        cache.stage(user, HandoffKey::LeadId, second);
        assert_eq!(cache.consume(user, HandoffKey::LeadId), Some(second));
    }

    #[test]
    fn slots_sao_escopados_por_usuario() {
        let cache = HandoffCache::default();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let id = Uuid::new_v4();

        cache.stage(alice, HandoffKey::ProductId, id);
        assert_eq!(cache.consume(bob, HandoffKey::ProductId), None);
        assert_eq!(cache.consume(alice, HandoffKey::ProductId), Some(id));
    }

    #[test]
    fn chaves_nao_se_misturam() {
        let cache = HandoffCache::default();
        let user = Uuid::new_v4();
        let id = Uuid::new_v4();

        cache.stage(user, HandoffKey::ProductId, id);
        assert_eq!(cache.consume(user, HandoffKey::LeadId), None);
        assert_eq!(cache.consume(user, HandoffKey::ProductId), Some(id));
    }
}
