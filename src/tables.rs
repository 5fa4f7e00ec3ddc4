// src/tables.rs
//
// Static rule tables and the word dictionary. These are immutable,
// process-lifetime configuration: one consolidated set consumed by a single
// engine instead of per-variant forks. Ordering inside PHONETIC_RULES is a
// correctness contract, not a style choice.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Multi-word idioms and contractions mapped to how they actually sound.
/// Declaration order breaks ties between patterns of equal length; the
/// matcher sorts by descending pattern length before applying.
pub const PHRASE_RULES: &[(&str, &str)] = &[
    ("what are you doing", "ワラユドゥーイン"),
    ("whatchu doing", "ワチュドゥーイン"),
    ("what are you", "ワラユ"),
    ("whatchu", "ワチュ"),
    ("i don't know", "アイドンノ"),
    ("i dunno", "アイダノ"),
    ("don't know", "ドンノ"),
    ("dunno", "ダノ"),
    ("got to", "ガラ"),
    ("gotta", "ガラ"),
    ("want to", "ワナ"),
    ("wanna", "ワナ"),
    ("going to", "ゴナ"),
    ("gonna", "ゴナ"),
    ("let me", "レミー"),
    ("lemme", "レミー"),
    ("give me", "ギミー"),
    ("gimme", "ギミー"),
    ("kind of", "カイナ"),
    ("kinda", "カイナ"),
    ("sort of", "ソーラ"),
    ("sorta", "ソーラ"),
    ("a lot of", "アロラ"),
    ("alotta", "アロラ"),
    ("out of", "アウラ"),
    ("outta", "アウラ"),
    ("used to", "ユースタ"),
    ("have to", "ハフタ"),
    ("thank you", "サンキュー"),
    ("excuse me", "エクスキューズミー"),
    ("because", "コズ"),
    ("cause", "コズ"),
    ("cuz", "コズ"),
];

/// Phrase rules pre-sorted longest pattern first (char count, stable on
/// declaration order). A shorter rule can never pre-empt a longer one.
pub static SORTED_PHRASE_RULES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut rules: Vec<(&str, &str)> = PHRASE_RULES.to_vec();
    rules.sort_by_key(|(pattern, _)| std::cmp::Reverse(pattern.chars().count()));
    rules
});

/// Closed vocabulary of normalized lowercase words with fixed katakana
/// renderings. Misses always fall through to the phonetic rules.
pub static WORD_DICT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // Greetings and set phrases
        ("hello", "ハロー"), ("hi", "ハイ"), ("hey", "ヘイ"),
        ("thank", "サンク"), ("thanks", "サンクス"),
        ("please", "プリーズ"), ("sorry", "ソーリー"), ("excuse", "エクスキューズ"),
        ("yes", "イエス"), ("no", "ノー"), ("ok", "オーケー"), ("okay", "オーケー"),
        // Pronouns and function words
        ("i", "アイ"), ("you", "ユー"), ("he", "ヒー"), ("she", "シー"),
        ("we", "ウィー"), ("they", "ゼイ"), ("it", "イット"),
        ("my", "マイ"), ("your", "ユア"), ("his", "ヒズ"), ("her", "ハー"),
        ("our", "アワー"), ("their", "ゼア"),
        ("me", "ミー"), ("him", "ヒム"), ("us", "アス"), ("them", "ゼム"),
        ("the", "ザ"), ("a", "ア"), ("an", "アン"),
        ("this", "ディス"), ("that", "ザット"), ("these", "ジーズ"), ("those", "ゾーズ"),
        ("and", "アンド"), ("or", "オア"), ("but", "バット"), ("so", "ソー"),
        ("if", "イフ"), ("of", "オブ"), ("to", "トゥー"), ("in", "イン"),
        ("on", "オン"), ("at", "アット"), ("for", "フォー"), ("with", "ウィズ"),
        ("from", "フロム"), ("by", "バイ"), ("up", "アップ"), ("down", "ダウン"),
        ("out", "アウト"), ("into", "イントゥ"), ("about", "アバウト"),
        ("is", "イズ"), ("are", "アー"), ("was", "ワズ"), ("were", "ワー"),
        ("be", "ビー"), ("been", "ビン"), ("am", "アム"),
        ("will", "ウィル"), ("would", "ウド"), ("can", "キャン"), ("could", "クド"),
        ("not", "ナット"), ("don't", "ドント"), ("can't", "キャント"),
        // Question words
        ("what", "ワット"), ("where", "ウェア"), ("when", "ウェン"),
        ("why", "ワイ"), ("how", "ハウ"), ("who", "フー"), ("which", "ウィッチ"),
        // Time and place
        ("now", "ナウ"), ("then", "ゼン"), ("here", "ヒア"), ("there", "ゼア"),
        ("today", "トゥデイ"), ("tomorrow", "トゥモロー"), ("yesterday", "イエスタデイ"),
        ("morning", "モーニング"), ("afternoon", "アフタヌーン"),
        ("evening", "イブニング"), ("night", "ナイト"),
        ("time", "タイム"), ("hour", "アワー"), ("minute", "ミニット"),
        ("second", "セカンド"), ("day", "デイ"), ("week", "ウィーク"),
        ("month", "マンス"), ("year", "イヤー"),
        ("home", "ホーム"), ("house", "ハウス"), ("school", "スクール"),
        ("office", "オフィス"), ("shop", "ショップ"), ("store", "ストア"),
        ("restaurant", "レストラン"), ("hotel", "ホテル"), ("station", "ステーション"),
        ("work", "ワーク"), ("world", "ワールド"),
        // Verbs
        ("go", "ゴー"), ("come", "カム"), ("get", "ゲット"), ("take", "テイク"),
        ("make", "メイク"), ("do", "ドゥー"), ("have", "ハブ"), ("see", "シー"),
        ("know", "ノー"), ("think", "シンク"), ("say", "セイ"), ("tell", "テル"),
        ("talk", "トーク"), ("speak", "スピーク"), ("ask", "アスク"),
        ("answer", "アンサー"), ("want", "ウォント"), ("need", "ニード"),
        ("like", "ライク"), ("love", "ラブ"), ("look", "ルック"), ("hear", "ヒア"),
        ("eat", "イート"), ("drink", "ドリンク"), ("play", "プレイ"),
        ("help", "ヘルプ"), ("buy", "バイ"), ("sell", "セル"),
        ("open", "オープン"), ("close", "クローズ"), ("start", "スタート"),
        ("stop", "ストップ"), ("read", "リード"), ("write", "ライト"),
        ("run", "ラン"), ("walk", "ウォーク"), ("meet", "ミート"),
        ("wait", "ウェイト"), ("watch", "ウォッチ"), ("listen", "リッスン"),
        // Adjectives
        ("good", "グッド"), ("bad", "バッド"), ("nice", "ナイス"),
        ("great", "グレート"), ("big", "ビッグ"), ("small", "スモール"),
        ("new", "ニュー"), ("old", "オールド"), ("young", "ヤング"),
        ("hot", "ホット"), ("cold", "コールド"), ("warm", "ウォーム"),
        ("cool", "クール"), ("fast", "ファスト"), ("slow", "スロー"),
        ("high", "ハイ"), ("low", "ロー"), ("easy", "イージー"),
        ("hard", "ハード"), ("difficult", "ディフィカルト"),
        ("right", "ライト"), ("light", "ライト"), ("wrong", "ロング"),
        ("happy", "ハッピー"), ("busy", "ビジー"), ("ready", "レディー"),
        // Sounds Japanese speakers tend to flatten
        ("three", "スリー"), ("through", "スルー"), ("throw", "スロー"),
        ("thing", "シング"), ("birthday", "バースデー"),
        ("really", "リアリー"), ("very", "ベリー"),
        ("water", "ウォーター"), ("coffee", "コーヒー"), ("tea", "ティー"),
        // Numbers
        ("one", "ワン"), ("two", "トゥー"), ("four", "フォー"),
        ("five", "ファイブ"), ("six", "シックス"), ("seven", "セブン"),
        ("eight", "エイト"), ("nine", "ナイン"), ("ten", "テン"),
    ]
    .iter()
    .copied()
    .collect()
});

/// Ordered pattern→kana substitutions for words outside the dictionary.
/// Multigraphs come before digraphs before single letters; within a band,
/// declaration order is load-bearing. Because every replacement emits kana
/// and every pattern is Latin, no rule can re-match its own output.
pub const PHONETIC_RULES: &[(&str, &str)] = &[
    // Four-letter multigraphs
    ("tion", "ション"),
    ("sion", "ション"),
    ("ight", "アイト"),
    ("eigh", "エイ"),
    ("ough", "オー"),
    ("augh", "オー"),
    ("ture", "チャー"),
    // Three-letter multigraphs
    ("ing", "イング"),
    ("ght", "ト"),
    ("est", "エスト"),
    ("ous", "アス"),
    // Consonant digraphs
    ("th", "ス"), ("sh", "シュ"), ("ch", "チ"), ("ph", "フ"),
    ("wh", "ウ"), ("qu", "クワ"), ("ck", "ク"),
    // Vowel digraphs
    ("oo", "ウー"), ("ee", "イー"), ("ea", "イー"),
    ("ai", "エイ"), ("ay", "エイ"), ("ei", "エイ"), ("ey", "エイ"),
    ("ou", "アウ"), ("ow", "アウ"), ("oi", "オイ"), ("oy", "オイ"),
    ("ie", "アイ"), ("ue", "ウー"), ("ui", "ウイ"),
    ("au", "オー"), ("aw", "オー"), ("oa", "オー"),
    // R-colored vowels
    ("er", "アー"), ("ir", "アー"), ("ur", "アー"), ("ar", "アー"), ("or", "オー"),
    // Word endings
    ("ed", "ド"), ("ly", "リー"), ("ty", "ティー"),
    ("ry", "リー"), ("ny", "ニー"), ("gy", "ジー"),
    // Nasal and liquid clusters
    ("ng", "ング"), ("nk", "ンク"), ("nt", "ント"), ("nd", "ンド"),
    ("mp", "ンプ"), ("mb", "ム"),
    ("rr", "ル"), ("ll", "ル"),
    // S clusters
    ("st", "スト"), ("sp", "スプ"), ("sc", "スク"), ("sk", "スク"),
    ("sm", "スム"), ("sn", "スン"), ("sl", "スル"), ("sw", "スワ"), ("tw", "トゥ"),
    // Consonant + r/l clusters
    ("tr", "トル"), ("dr", "ドル"), ("pr", "プル"), ("br", "ブル"),
    ("cr", "クル"), ("gr", "グル"), ("fr", "フル"),
    ("pl", "プル"), ("bl", "ブル"), ("cl", "クル"), ("gl", "グル"), ("fl", "フル"),
    // Single letters
    ("a", "ア"), ("e", "エ"), ("i", "イ"), ("o", "オ"), ("u", "ウ"),
    ("b", "ブ"), ("c", "ク"), ("d", "ド"), ("f", "フ"), ("g", "グ"),
    ("h", "ハ"), ("j", "ジ"), ("k", "ク"), ("l", "ル"), ("m", "ム"),
    ("n", "ン"), ("p", "プ"), ("q", "ク"), ("r", "ル"), ("s", "ス"),
    ("t", "ト"), ("v", "ブ"), ("w", "ワ"), ("x", "クス"), ("y", "ヤ"), ("z", "ズ"),
];
