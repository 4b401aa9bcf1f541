// src/services/vehicle_service.rs

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::{
    db::VehicleRepository,
    models::vehicle::{
        BodyType, DocumentStatus, DocumentalStatus, DocumentationItem, FilterOptionsResponse,
        FinancingConditions, FuelType, ItemCategory, SaleConditions, SortCriteria,
        TechnicalReport, TransmissionType, Vehicle, VehicleDetail, VehicleFilters, VehicleHistory,
        VehicleItem, VehicleListRequest, VehicleListResponse, VehicleOrigin, VehiclePhoto,
        VehicleRevision, VehicleSpecifications, VehicleStatus, MAX_PAGE_SIZE,
    },
};

pub const MAX_SIMILAR_VEHICLES: usize = 6;

#[derive(Clone)]
pub struct VehicleService {
    repo: VehicleRepository,
    share_base_url: String,
}

impl VehicleService {
    pub fn new(repo: VehicleRepository, share_base_url: impl Into<String>) -> Self {
        Self {
            repo,
            share_base_url: share_base_url.into(),
        }
    }

    // =========================================================================
    //  1. LISTAGEM (FILTRO -> ORDENAÇÃO -> PAGINAÇÃO)
    // =========================================================================

    pub fn list(&self, request: &VehicleListRequest) -> VehicleListResponse {
        let mut filtered: Vec<&Vehicle> = self
            .repo
            .all()
            .iter()
            .filter(|v| matches_filters(v, &request.filters))
            .collect();

        sort_vehicles(&mut filtered, request.ordenacao);

        // Valores normalizados uma vez; a resposta reporta o que foi usado
        let pagina = request.pagina.max(1);
        let page_size = request.itens_por_pagina.clamp(1, MAX_PAGE_SIZE);

        let total = filtered.len();
        let total_paginas = total.div_ceil(page_size as usize) as u32;

        // Página fora do intervalo devolve fatia vazia, não erro
        let start = (pagina as usize - 1) * page_size as usize;
        let veiculos = filtered
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();

        VehicleListResponse {
            veiculos,
            total,
            pagina,
            itens_por_pagina: page_size,
            total_paginas,
        }
    }

    // =========================================================================
    //  2. OPÇÕES DE FILTRO
    // =========================================================================

    /// Valores distintos do catálogo inteiro, ignorando filtros ativos.
    pub fn filter_options(&self) -> FilterOptionsResponse {
        let vehicles = self.repo.all();

        let marcas = distinct_sorted(vehicles.iter().map(|v| v.marca.as_str()));
        let modelos = distinct_sorted(vehicles.iter().map(|v| v.modelo.as_str()));

        let mut anos: Vec<i32> = vehicles
            .iter()
            .map(|v| v.ano)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        anos.reverse();

        let mut cambios: Vec<TransmissionType> = Vec::new();
        for cambio in vehicles.iter().filter_map(|v| v.cambio) {
            if !cambios.contains(&cambio) {
                cambios.push(cambio);
            }
        }
        cambios.sort_by_key(|c| c.label());

        FilterOptionsResponse { marcas, modelos, anos, cambios }
    }

    pub fn models_by_brands(&self, marcas: &[String]) -> Vec<String> {
        let vehicles = self.repo.all();

        if marcas.is_empty() {
            return distinct_sorted(vehicles.iter().map(|v| v.modelo.as_str()));
        }

        distinct_sorted(
            vehicles
                .iter()
                .filter(|v| marcas.contains(&v.marca))
                .map(|v| v.modelo.as_str()),
        )
    }

    // =========================================================================
    //  3. DETALHE
    // =========================================================================

    pub fn exists(&self, id: &str) -> bool {
        self.repo.find_by_id(id).is_some()
    }

    /// `None` quando o id não existe; o handler traduz para 404.
    pub fn get_detail(&self, id: &str) -> Option<VehicleDetail> {
        let vehicle = self.repo.find_by_id(id)?;
        tracing::debug!(id = %vehicle.id, "Montando detalhe do veículo");
        Some(self.build_detail(vehicle))
    }

    fn build_detail(&self, vehicle: &Vehicle) -> VehicleDetail {
        VehicleDetail {
            id: vehicle.id.clone(),
            titulo_anuncio: format!("{} {} {}", vehicle.marca, vehicle.modelo, vehicle.ano),
            preco: vehicle.preco,
            status_veiculo: VehicleStatus::Disponivel,
            fotos: build_photos(vehicle),
            especificacoes: build_specifications(vehicle),
            itens_serie: standard_items(),
            opcionais: optional_items(),
            historico: default_history(),
            condicoes_venda: default_sale_conditions(),
            url_compartilhamento: self.share_url(vehicle),
            veiculos_similares: self.similar_vehicles(vehicle),
        }
    }

    fn share_url(&self, vehicle: &Vehicle) -> String {
        format!(
            "{}/veiculo/{}-{}-{}-{}",
            self.share_base_url.trim_end_matches('/'),
            vehicle.marca.to_lowercase(),
            vehicle.modelo.to_lowercase(),
            vehicle.ano,
            vehicle.id
        )
    }

    // =========================================================================
    //  4. VEÍCULOS SIMILARES
    // =========================================================================

    /// Faixa de ±30% do preço de referência. Mesma marca vem primeiro,
    /// depois a menor distância de preço. No máximo 6.
    pub fn similar_vehicles(&self, reference: &Vehicle) -> Vec<Vehicle> {
        let band = reference.preco * Decimal::new(3, 1);
        let min_price = reference.preco - band;
        let max_price = reference.preco + band;

        // Mesma marca dispensa só o limite inferior; o superior vale para todos.
        let mut similar: Vec<&Vehicle> = self
            .repo
            .all()
            .iter()
            .filter(|v| {
                v.id != reference.id
                    && (v.marca == reference.marca || v.preco >= min_price)
                    && v.preco <= max_price
            })
            .collect();

        similar.sort_by(|a, b| {
            let a_same = a.marca == reference.marca;
            let b_same = b.marca == reference.marca;
            b_same.cmp(&a_same).then_with(|| {
                let a_diff = (a.preco - reference.preco).abs();
                let b_diff = (b.preco - reference.preco).abs();
                a_diff.cmp(&b_diff)
            })
        });

        similar
            .into_iter()
            .take(MAX_SIMILAR_VEHICLES)
            .cloned()
            .collect()
    }
}

// --- FILTROS ---

fn matches_filters(vehicle: &Vehicle, filters: &VehicleFilters) -> bool {
    (filters.marcas.is_empty() || filters.marcas.contains(&vehicle.marca))
        && (filters.modelos.is_empty() || filters.modelos.contains(&vehicle.modelo))
        && filters.ano_min.is_none_or(|min| vehicle.ano >= min)
        && filters.ano_max.is_none_or(|max| vehicle.ano <= max)
        && filters.preco_min.is_none_or(|min| vehicle.preco >= min)
        && filters.preco_max.is_none_or(|max| vehicle.preco <= max)
        // Sem câmbio cadastrado nunca casa com um filtro de câmbio ativo
        && (filters.cambios.is_empty()
            || vehicle.cambio.is_some_and(|c| filters.cambios.contains(&c)))
}

// --- ORDENAÇÃO ---
// `sort_by` é estável: empates mantêm a ordem do catálogo.

fn sort_vehicles(vehicles: &mut [&Vehicle], criteria: SortCriteria) {
    match criteria {
        SortCriteria::Relevancia => {}
        SortCriteria::PrecoMenor => vehicles.sort_by(|a, b| a.preco.cmp(&b.preco)),
        SortCriteria::PrecoMaior => vehicles.sort_by(|a, b| b.preco.cmp(&a.preco)),
        SortCriteria::AnoRecente => vehicles.sort_by(|a, b| b.ano.cmp(&a.ano)),
        SortCriteria::AnoAntigo => vehicles.sort_by(|a, b| a.ano.cmp(&b.ano)),
        SortCriteria::ModeloAz => vehicles.sort_by(|a, b| compare_models(&a.modelo, &b.modelo)),
        SortCriteria::ModeloZa => vehicles.sort_by(|a, b| compare_models(&b.modelo, &a.modelo)),
    }
}

// Ignora caixa primeiro; desempata pelo texto original.
fn compare_models(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// --- BLOCOS FIXOS DO ANÚNCIO ---

fn build_photos(vehicle: &Vehicle) -> Vec<VehiclePhoto> {
    let mut fotos = vec![VehiclePhoto {
        url: vehicle.imagem_principal.clone(),
        legenda: Some("Vista frontal".to_string()),
        principal: true,
    }];

    let views = [
        ("Lateral", "Vista lateral"),
        ("Traseira", "Vista traseira"),
        ("Interior", "Interior"),
        ("Painel", "Painel"),
    ];
    fotos.extend(views.into_iter().map(|(view, legenda)| VehiclePhoto {
        url: format!(
            "https://via.placeholder.com/800x600?text={}+{}+{}",
            vehicle.marca, vehicle.modelo, view
        ),
        legenda: Some(legenda.to_string()),
        principal: false,
    }));

    fotos
}

fn build_specifications(vehicle: &Vehicle) -> VehicleSpecifications {
    VehicleSpecifications {
        marca: vehicle.marca.clone(),
        modelo: vehicle.modelo.clone(),
        ano_fabricacao: vehicle.ano,
        ano_modelo: vehicle.ano,
        quilometragem: vehicle.quilometragem.unwrap_or(0),
        combustivel: FuelType::Flex,
        cambio: vehicle.cambio.unwrap_or(TransmissionType::Manual),
        potencia: "120 cv".to_string(),
        cor: "Prata".to_string(),
        portas: 4,
        carroceria: BodyType::Sedan,
        motor: "1.8".to_string(),
        final_placa: 5,
    }
}

fn item(nome: &str, categoria: ItemCategory) -> VehicleItem {
    VehicleItem { nome: nome.to_string(), categoria }
}

fn standard_items() -> Vec<VehicleItem> {
    vec![
        item("Ar-condicionado", ItemCategory::Conforto),
        item("Direção elétrica", ItemCategory::Conforto),
        item("Vidros elétricos", ItemCategory::Conforto),
        item("Travas elétricas", ItemCategory::Conforto),
        item("Airbag duplo", ItemCategory::Seguranca),
        item("Freios ABS", ItemCategory::Seguranca),
        item("Controle de estabilidade", ItemCategory::Seguranca),
        item("Rádio com Bluetooth", ItemCategory::Tecnologia),
    ]
}

fn optional_items() -> Vec<VehicleItem> {
    vec![
        item("Teto solar", ItemCategory::Conforto),
        item("Bancos de couro", ItemCategory::Conforto),
        item("Sensor de estacionamento", ItemCategory::Tecnologia),
        item("Câmera de ré", ItemCategory::Tecnologia),
        item("Rodas de liga leve", ItemCategory::Estetica),
    ]
}

fn default_history() -> VehicleHistory {
    VehicleHistory {
        procedencia: VehicleOrigin::Concessionaria,
        proprietarios: 1,
        garantia: Some("Até 12/2025".to_string()),
        revisoes: vec![VehicleRevision {
            data: "2023-06-15".to_string(),
            quilometragem: 5000,
            local: "Concessionária Autorizada".to_string(),
        }],
        sinistros: Vec::new(),
        laudo_tecnico: Some(TechnicalReport {
            data_inspecao: "2023-12-01".to_string(),
            resultado_geral: "Aprovado - Veículo em excelente estado".to_string(),
        }),
    }
}

fn document(nome: &str, observacoes: &str) -> DocumentationItem {
    DocumentationItem {
        nome: nome.to_string(),
        observacoes: Some(observacoes.to_string()),
    }
}

fn default_sale_conditions() -> SaleConditions {
    SaleConditions {
        formas_pagamento: vec![
            "À vista".to_string(),
            "Financiamento".to_string(),
            "Consórcio".to_string(),
        ],
        condicoes_financiamento: Some(FinancingConditions {
            entrada_minima: Decimal::from(20000),
            taxa_juros: Decimal::new(199, 2),
            prazo_maximo: 60,
        }),
        aceita_troca: true,
        observacoes_venda: Some("Aceita veículo como parte do pagamento".to_string()),
        documentacao_necessaria: vec![
            document("RG e CPF", "Original e cópia"),
            document("Comprovante de residência", "Atualizado (últimos 3 meses)"),
            document("Comprovante de renda", "Para financiamento"),
        ],
        situacao_documental: DocumentalStatus {
            status: DocumentStatus::Regular,
            pendencias: Vec::new(),
            observacoes: Some("Documentação completa e regularizada".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> VehicleService {
        VehicleService::new(VehicleRepository::seeded(), "https://catalogo-carros.com")
    }

    fn full_listing(service: &VehicleService, filters: VehicleFilters, ordenacao: SortCriteria) -> Vec<Vehicle> {
        let request = VehicleListRequest {
            filters,
            ordenacao,
            pagina: 1,
            itens_por_pagina: 100,
        };
        service.list(&request).veiculos
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    // ============================================================
    // LISTAGEM
    // ============================================================

    #[test]
    fn defaults_return_first_page_in_catalog_order() {
        let result = service().list(&VehicleListRequest::default());

        assert_eq!(result.total, 15);
        assert_eq!(result.pagina, 1);
        assert_eq!(result.itens_por_pagina, 12);
        assert_eq!(result.total_paginas, 2);
        assert_eq!(result.veiculos.len(), 12);
        assert_eq!(result.veiculos[0].id, "1");
        assert_eq!(result.veiculos[11].id, "12");
    }

    #[test]
    fn brand_and_year_filter_sorted_by_price() {
        let filters = VehicleFilters {
            marcas: vec!["Honda".into(), "Toyota".into()],
            ano_min: Some(2020),
            ..Default::default()
        };
        let result = full_listing(&service(), filters, SortCriteria::PrecoMenor);

        // Fit 82000, Yaris 92000, Corolla 135000, Civic 145000
        assert_eq!(ids(&result), vec!["11", "15", "2", "1"]);
        let corolla = result.iter().position(|v| v.modelo == "Corolla").unwrap();
        let civic = result.iter().position(|v| v.modelo == "Civic").unwrap();
        assert!(corolla < civic);
    }

    #[test]
    fn filters_combine_with_and_semantics() {
        let filters = VehicleFilters {
            marcas: vec!["Volkswagen".into()],
            cambios: vec![TransmissionType::Automatico],
            preco_max: Some(Decimal::from(100000)),
            ..Default::default()
        };
        let result = full_listing(&service(), filters, SortCriteria::Relevancia);

        // T-Cross passa do teto de preço; Gol é manual
        assert_eq!(ids(&result), vec!["13"]);
    }

    #[test]
    fn model_filter_matches_any_listed_model() {
        let filters = VehicleFilters {
            modelos: vec!["Civic".into(), "Fit".into()],
            ..Default::default()
        };
        let result = full_listing(&service(), filters, SortCriteria::Relevancia);

        assert_eq!(ids(&result), vec!["1", "11"]);
    }

    #[test]
    fn model_and_transmission_filters_intersect() {
        let filters = VehicleFilters {
            modelos: vec!["Civic".into(), "Fit".into()],
            cambios: vec![TransmissionType::Cvt],
            ..Default::default()
        };
        let result = full_listing(&service(), filters, SortCriteria::Relevancia);

        // Civic é automático
        assert_eq!(ids(&result), vec!["11"]);
    }

    #[test]
    fn vehicle_without_transmission_never_matches_transmission_filter() {
        let mut catalog = VehicleRepository::seeded().all().to_vec();
        catalog[0].cambio = None;
        let svc = VehicleService::new(VehicleRepository::new(catalog), "https://catalogo-carros.com");

        let request = VehicleListRequest {
            filters: VehicleFilters {
                marcas: vec!["Honda".into()],
                cambios: vec![TransmissionType::Automatico],
                ..Default::default()
            },
            ..Default::default()
        };
        let result = svc.list(&request);
        assert_eq!(result.total, 0);
        assert!(result.veiculos.is_empty());

        // Sem filtro de câmbio o Civic volta a aparecer
        let request = VehicleListRequest {
            filters: VehicleFilters {
                marcas: vec!["Honda".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(svc.list(&request).total, 2);
    }

    #[test]
    fn out_of_range_paging_values_are_normalized_in_response() {
        let request = VehicleListRequest {
            pagina: 0,
            itens_por_pagina: 0,
            ..Default::default()
        };
        let result = service().list(&request);

        assert_eq!(result.pagina, 1);
        assert_eq!(result.itens_por_pagina, 1);
        assert_eq!(result.veiculos.len(), 1);
        assert_eq!(result.total_paginas, 15);

        let request = VehicleListRequest {
            itens_por_pagina: 500,
            ..Default::default()
        };
        let result = service().list(&request);
        assert_eq!(result.itens_por_pagina, MAX_PAGE_SIZE);
        assert_eq!(result.veiculos.len(), 15);
        assert_eq!(result.total_paginas, 1);
    }

    #[test]
    fn total_matches_predicate_count() {
        let svc = service();
        let filters = VehicleFilters {
            ano_min: Some(2022),
            ano_max: Some(2022),
            preco_min: Some(Decimal::from(90000)),
            ..Default::default()
        };
        let expected = VehicleRepository::seeded()
            .all()
            .iter()
            .filter(|v| v.ano == 2022 && v.preco >= Decimal::from(90000))
            .count();

        let request = VehicleListRequest {
            filters,
            itens_por_pagina: 2,
            ..Default::default()
        };
        let result = svc.list(&request);

        assert_eq!(result.total, expected);
        assert!(result.veiculos.len() <= 2);
    }

    #[test]
    fn empty_filter_values_are_ignored() {
        let filters = VehicleFilters {
            marcas: Vec::new(),
            modelos: Vec::new(),
            cambios: Vec::new(),
            ..Default::default()
        };
        let result = full_listing(&service(), filters, SortCriteria::Relevancia);
        assert_eq!(result.len(), 15);
    }

    #[test]
    fn no_match_is_an_empty_page_not_an_error() {
        let filters = VehicleFilters {
            marcas: vec!["Ferrari".into()],
            ..Default::default()
        };
        let result = service().list(&VehicleListRequest { filters, ..Default::default() });

        assert_eq!(result.total, 0);
        assert_eq!(result.total_paginas, 0);
        assert!(result.veiculos.is_empty());
    }

    #[test]
    fn out_of_range_page_is_empty_but_keeps_totals() {
        let request = VehicleListRequest {
            pagina: 9,
            itens_por_pagina: 5,
            ..Default::default()
        };
        let result = service().list(&request);

        assert!(result.veiculos.is_empty());
        assert_eq!(result.total, 15);
        assert_eq!(result.total_paginas, 3);
        assert_eq!(result.pagina, 9);
    }

    #[test]
    fn pages_concatenate_to_full_ordering() {
        let svc = service();
        let full = full_listing(&svc, VehicleFilters::default(), SortCriteria::AnoRecente);

        let mut collected = Vec::new();
        let first = svc.list(&VehicleListRequest {
            ordenacao: SortCriteria::AnoRecente,
            itens_por_pagina: 4,
            ..Default::default()
        });
        for pagina in 1..=first.total_paginas {
            let page = svc.list(&VehicleListRequest {
                ordenacao: SortCriteria::AnoRecente,
                pagina,
                itens_por_pagina: 4,
                ..Default::default()
            });
            collected.extend(page.veiculos);
        }

        assert_eq!(ids(&collected), ids(&full));
    }

    // ============================================================
    // ORDENAÇÃO
    // ============================================================

    #[test]
    fn price_sorts_are_monotonic() {
        let svc = service();
        let asc = full_listing(&svc, VehicleFilters::default(), SortCriteria::PrecoMenor);
        assert!(asc.windows(2).all(|w| w[0].preco <= w[1].preco));

        let desc = full_listing(&svc, VehicleFilters::default(), SortCriteria::PrecoMaior);
        assert!(desc.windows(2).all(|w| w[0].preco >= w[1].preco));
    }

    #[test]
    fn year_sorts_are_monotonic_and_stable() {
        let svc = service();
        let recent = full_listing(&svc, VehicleFilters::default(), SortCriteria::AnoRecente);
        assert!(recent.windows(2).all(|w| w[0].ano >= w[1].ano));
        // Empate em 2023: ordem do catálogo preservada
        assert_eq!(recent[0].id, "1");
        assert_eq!(recent[1].id, "3");

        let oldest = full_listing(&svc, VehicleFilters::default(), SortCriteria::AnoAntigo);
        assert!(oldest.windows(2).all(|w| w[0].ano <= w[1].ano));
        assert_eq!(oldest[0].modelo, "Gol");
    }

    #[test]
    fn model_sorts_are_alphabetical() {
        let svc = service();
        let az = full_listing(&svc, VehicleFilters::default(), SortCriteria::ModeloAz);
        assert!(az.windows(2).all(|w| compare_models(&w[0].modelo, &w[1].modelo) != Ordering::Greater));
        assert_eq!(az[0].modelo, "Argo");

        let za = full_listing(&svc, VehicleFilters::default(), SortCriteria::ModeloZa);
        assert_eq!(za[0].modelo, "Yaris");
    }

    #[test]
    fn relevance_keeps_filtered_order() {
        let result = full_listing(&service(), VehicleFilters::default(), SortCriteria::Relevancia);
        let expected: Vec<String> = (1..=15).map(|i| i.to_string()).collect();
        assert_eq!(ids(&result), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    // ============================================================
    // OPÇÕES DE FILTRO
    // ============================================================

    #[test]
    fn filter_options_are_distinct_and_sorted() {
        let options = service().filter_options();

        assert_eq!(
            options.marcas,
            vec!["Chevrolet", "Fiat", "Honda", "Hyundai", "Jeep", "Nissan", "Toyota", "Volkswagen"]
        );
        assert_eq!(options.modelos.len(), 15);
        assert!(options.modelos.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(options.anos, vec![2023, 2022, 2021, 2020]);
        assert_eq!(
            options.cambios,
            vec![TransmissionType::Automatico, TransmissionType::Cvt, TransmissionType::Manual]
        );
    }

    #[test]
    fn models_by_brands() {
        let svc = service();
        assert_eq!(
            svc.models_by_brands(&["Volkswagen".to_string(), "Honda".to_string()]),
            vec!["Civic", "Fit", "Gol", "Polo", "T-Cross"]
        );
        assert!(svc.models_by_brands(&["Ferrari".to_string()]).is_empty());
    }

    #[test]
    fn models_by_no_brand_matches_filter_options() {
        let svc = service();
        assert_eq!(svc.models_by_brands(&[]), svc.filter_options().modelos);
    }

    // ============================================================
    // DETALHE E SIMILARES
    // ============================================================

    #[test]
    fn unknown_id_is_not_found() {
        assert!(service().get_detail("nonexistent").is_none());
        assert!(!service().exists("nonexistent"));
    }

    #[test]
    fn detail_builds_title_photos_and_share_url() {
        let detail = service().get_detail("7").unwrap();

        assert_eq!(detail.titulo_anuncio, "Volkswagen T-Cross 2023");
        assert_eq!(detail.status_veiculo, VehicleStatus::Disponivel);
        assert_eq!(detail.fotos.len(), 5);
        assert_eq!(detail.fotos.iter().filter(|f| f.principal).count(), 1);
        assert_eq!(detail.fotos[0].url, "https://via.placeholder.com/300x169?text=VW+T-Cross+2023");
        assert_eq!(
            detail.fotos[1].url,
            "https://via.placeholder.com/800x600?text=Volkswagen+T-Cross+Lateral"
        );
        assert_eq!(
            detail.url_compartilhamento,
            "https://catalogo-carros.com/veiculo/volkswagen-t-cross-2023-7"
        );
        assert_eq!(detail.especificacoes.cambio, TransmissionType::Automatico);
        assert_eq!(detail.especificacoes.quilometragem, 3000);
        assert_eq!(detail.itens_serie.len(), 8);
        assert_eq!(detail.opcionais.len(), 5);
    }

    #[test]
    fn detail_fills_missing_optional_fields() {
        let mut bare = VehicleRepository::seeded().all().to_vec();
        bare[0].quilometragem = None;
        bare[0].cambio = None;
        let svc = VehicleService::new(VehicleRepository::new(bare), "https://exemplo.com/");

        let detail = svc.get_detail("1").unwrap();
        assert_eq!(detail.especificacoes.quilometragem, 0);
        assert_eq!(detail.especificacoes.cambio, TransmissionType::Manual);
        assert_eq!(detail.url_compartilhamento, "https://exemplo.com/veiculo/honda-civic-2023-1");
    }

    #[test]
    fn civic_similar_ranks_same_brand_first() {
        let detail = service().get_detail("1").unwrap();

        assert_eq!(detail.titulo_anuncio, "Honda Civic 2023");
        // Fit (mesma marca, fora do limite inferior) primeiro, depois distância de preço
        assert_eq!(ids(&detail.veiculos_similares), vec!["11", "2", "12", "14", "7", "10"]);
    }

    #[test]
    fn similar_never_contains_reference_and_is_bounded() {
        let svc = service();
        for vehicle in VehicleRepository::seeded().all() {
            let similar = svc.get_detail(&vehicle.id).unwrap().veiculos_similares;
            assert!(similar.len() <= MAX_SIMILAR_VEHICLES);
            assert!(similar.iter().all(|v| v.id != vehicle.id));
        }
    }

    #[test]
    fn similar_respects_upper_bound_even_for_same_brand() {
        // Gol 58000: teto 75400. Polo e T-Cross (mesma marca) ficam fora.
        let svc = service();
        let gol = VehicleRepository::seeded().find_by_id("6").unwrap().clone();
        let similar = svc.similar_vehicles(&gol);

        assert!(similar.iter().all(|v| v.preco <= Decimal::from(75400)));
        assert_eq!(ids(&similar), vec!["4"]);
    }
}
