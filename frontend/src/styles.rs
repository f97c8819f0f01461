pub const PAGE: &str = "min-h-screen flex items-center justify-center p-4";
pub const PANEL: &str = "max-w-6xl w-full bg-white/90 dark:bg-gray-900/90 backdrop-blur-md rounded-2xl shadow-2xl p-6 grid grid-cols-1 lg:grid-cols-2 gap-8";
pub const WHEEL_COLUMN: &str = "flex flex-col items-center justify-center gap-6";
pub const INFO_COLUMN: &str = "space-y-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm border border-gray-200 dark:border-gray-700";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_RESULT: &str = "p-4 rounded-lg bg-gradient-to-r from-green-50 to-blue-50 dark:from-green-900/40 dark:to-blue-900/40 border-2 border-green-200 dark:border-green-800 transition-all duration-500";
pub const LEGEND_ROW: &str = "flex items-center justify-between p-3 rounded-lg border border-gray-200 dark:border-gray-700";
pub const LEGEND_DOT: &str = "w-4 h-4 rounded-full flex-shrink-0";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-800 dark:text-white mb-4";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-800 dark:text-white mb-4";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_HINT: &str = "text-sm text-gray-600 dark:text-gray-400 text-center";
pub const TEXT_PRIZE: &str = "text-3xl font-bold text-green-600 dark:text-green-400 mb-2";
pub const BUTTON_SPIN: &str = "relative w-full px-8 py-4 rounded-full font-bold text-lg shadow-lg overflow-hidden text-white bg-gradient-to-r from-blue-500 to-purple-600 transition-all duration-300";
pub const BUTTON_SPIN_ACTIVE: &str = "hover:scale-105 active:scale-95 hover:shadow-xl";
pub const BUTTON_SPIN_DISABLED: &str = "opacity-50 cursor-not-allowed";
