// src/services/checks.rs
//
// Validações cruzadas entre entidades. Rodam sempre DEPOIS da validação
// de campo (regex, obrigatoriedade) e antes de salvar; uma falha vira
// erro 400 preso ao campo, nunca falha dura.

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{ads::Ads, contract::Contract, lead::Lead},
};

/// O contrato não pode terminar antes de começar.
pub(crate) fn check_end_after_start(
    start_day: chrono::NaiveDate,
    end_day: chrono::NaiveDate,
) -> Result<(), AppError> {
    if end_day < start_day {
        return Err(AppError::FieldError {
            field: "endDay",
            message: "A data de término do contrato não pode ser anterior à data de início.".into(),
        });
    }
    Ok(())
}

/// A campanha escolhida tem que ser a mesma que originou o lead.
pub(crate) fn check_ads_matches_lead(lead: &Lead, ads: &Ads) -> Result<(), AppError> {
    if lead.ads_id != ads.id {
        return Err(AppError::FieldError {
            field: "ads",
            message: "A campanha selecionada não corresponde ao cliente selecionado.".into(),
        });
    }
    Ok(())
}

/// O serviço escolhido tem que ser o serviço da campanha.
pub(crate) fn check_product_matches_ads(ads: &Ads, product_id: Uuid) -> Result<(), AppError> {
    if ads.product_id != product_id {
        return Err(AppError::FieldError {
            field: "product",
            message: "O serviço selecionado não corresponde à campanha selecionada.".into(),
        });
    }
    Ok(())
}

/// Só leads ainda não convertidos entram em contratos e clientes novos.
pub(crate) fn check_lead_unconverted(lead: &Lead) -> Result<(), AppError> {
    if lead.to_active {
        return Err(AppError::FieldError {
            field: "lead",
            message: "O cliente selecionado já foi convertido.".into(),
        });
    }
    Ok(())
}

/// O contrato opcional do cliente precisa apontar para o mesmo lead e a
/// mesma campanha do próprio cliente.
pub(crate) fn check_contract_matches(
    lead: &Lead,
    ads: &Ads,
    contract: &Contract,
) -> Result<(), AppError> {
    if contract.lead_id != lead.id {
        return Err(AppError::FieldError {
            field: "contract",
            message: "O contrato selecionado não corresponde ao cliente selecionado.".into(),
        });
    }
    if contract.ads_id != ads.id {
        return Err(AppError::FieldError {
            field: "contract",
            message: "O contrato selecionado não corresponde à campanha selecionada.".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ads::PromotionChannel;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn ads(id: Uuid, product_id: Uuid) -> Ads {
        Ads {
            id,
            name: "Campanha".into(),
            product_id,
            promotion_channel: PromotionChannel::Internet,
            description: String::new(),
            budget: Decimal::new(5000, 0),
        }
    }

    fn lead(id: Uuid, ads_id: Uuid, to_active: bool) -> Lead {
        Lead {
            id,
            first_name: "Maria".into(),
            last_name: "Silva".into(),
            email: None,
            phone: "+5511987654321".into(),
            ads_id,
            comment: None,
            to_active,
        }
    }

    fn contract(lead_id: Uuid, ads_id: Uuid, product_id: Uuid) -> Contract {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Contract {
            id: Uuid::new_v4(),
            name: "Contrato".into(),
            lead_id,
            ads_id,
            product_id,
            document: None,
            comment: None,
            cost: Decimal::new(1500, 0),
            conclusion_day: day,
            start_day: day,
            end_day: day,
        }
    }

    #[test]
    fn contrato_nao_termina_antes_de_comecar() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
        assert!(check_end_after_start(start, end).is_err());
        assert!(check_end_after_start(start, start).is_ok());
        assert!(check_end_after_start(end, start).is_ok());
    }

    #[test]
    fn servico_tem_que_bater_com_a_campanha() {
        let product_id = Uuid::new_v4();
        let a = ads(Uuid::new_v4(), product_id);
        assert!(check_product_matches_ads(&a, product_id).is_ok());

        let err = check_product_matches_ads(&a, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::FieldError { field: "product", .. }));
    }

    #[test]
    fn campanha_tem_que_bater_com_o_lead() {
        let ads_id = Uuid::new_v4();
        let a = ads(ads_id, Uuid::new_v4());
        let l = lead(Uuid::new_v4(), ads_id, false);
        assert!(check_ads_matches_lead(&l, &a).is_ok());

        let outra = ads(Uuid::new_v4(), Uuid::new_v4());
        let err = check_ads_matches_lead(&l, &outra).unwrap_err();
        assert!(matches!(err, AppError::FieldError { field: "ads", .. }));
    }

    #[test]
    fn lead_convertido_e_rejeitado() {
        let l = lead(Uuid::new_v4(), Uuid::new_v4(), true);
        assert!(check_lead_unconverted(&l).is_err());

        let l = lead(Uuid::new_v4(), Uuid::new_v4(), false);
        assert!(check_lead_unconverted(&l).is_ok());
    }

    #[test]
    fn contrato_do_cliente_tem_que_apontar_para_o_mesmo_lead_e_campanha() {
        let ads_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let a = ads(ads_id, product_id);
        let l = lead(Uuid::new_v4(), ads_id, false);

        let ok = contract(l.id, ads_id, product_id);
        assert!(check_contract_matches(&l, &a, &ok).is_ok());

        let outro_lead = contract(Uuid::new_v4(), ads_id, product_id);
        let err = check_contract_matches(&l, &a, &outro_lead).unwrap_err();
        assert!(matches!(err, AppError::FieldError { field: "contract", .. }));

        let outra_ads = contract(l.id, Uuid::new_v4(), product_id);
        let err = check_contract_matches(&l, &a, &outra_ads).unwrap_err();
        assert!(matches!(err, AppError::FieldError { field: "contract", .. }));
    }
}
