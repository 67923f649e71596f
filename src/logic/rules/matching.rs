//! ランクの隣接判定ルールを定義するよ。

use crate::components::card::Rank;

/// 2つのランクが隣り合っていれば true を返す。A と K はループして隣扱い！
///
/// 表向きかどうかはここでは見ない。それはこの関数の仕事じゃなくて、
/// クリックを処理する側が別にチェックすることになってるよ。
pub fn adjacent_rank(a: Rank, b: Rank) -> bool {
    let diff = (a.value() as i8 - b.value() as i8).abs();
    if diff == 1 {
        return true;
    }

    // A(1) と K(13) のループ
    if (a == Rank::Ace && b == Rank::King) || (a == Rank::King && b == Rank::Ace) {
        return true;
    }

    // ここまで来たら隣接じゃない
    false
}
