//! 評価対象の選択（対話式 / 引数指定）

use crate::error::{Result, TasacionError};
use dialoguer::MultiSelect;
use tasacion_common::format::listing_line;
use tasacion_common::Session;

/// 対話式で評価に含める掲載を選ぶ
///
/// スペースで切替、Enterで確定。初期値は現在の選択状態。
pub fn select_interactive(session: &mut Session) -> Result<()> {
    if session.listings.is_empty() {
        return Ok(());
    }

    let items: Vec<String> = session
        .listings
        .iter()
        .map(|l| listing_line(l, false))
        .collect();
    let defaults: Vec<bool> = session
        .listings
        .iter()
        .map(|l| session.selection.is_selected(&l.id))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Selecciona / desmarca anuncios (espacio: cambiar, enter: confirmar)")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|e| TasacionError::Interactive(e.to_string()))?;

    apply_choices(session, &chosen);
    Ok(())
}

/// 選ばれた行番号だけを選択状態にする
///
/// 同じIDの行が複数ある場合は後の行の選択が残る。
pub fn apply_choices(session: &mut Session, chosen: &[usize]) {
    let ids: Vec<String> = session.listings.iter().map(|l| l.id.clone()).collect();
    for (idx, id) in ids.iter().enumerate() {
        session.set_selected(id, chosen.contains(&idx));
    }
}

/// 指定IDを評価対象から外す
///
/// # Returns
/// 掲載一覧に存在しなかったID
pub fn deselect_ids(session: &mut Session, ids: &[String]) -> Vec<String> {
    let mut unknown = Vec::new();
    for id in ids {
        let id = id.trim();
        if session.listings.iter().any(|l| l.id == id) {
            session.set_selected(id, false);
        } else {
            unknown.push(id.to_string());
        }
    }
    unknown
}
