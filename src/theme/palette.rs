//! Built-in base palette

/// Default colour tokens the extension is merged onto
pub(super) const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    // Full scales for the hues the help-desk templates lean on
    ("gray-50", "#F9FAFB"),
    ("gray-100", "#F3F4F6"),
    ("gray-200", "#E5E7EB"),
    ("gray-300", "#D1D5DB"),
    ("gray-400", "#9CA3AF"),
    ("gray-500", "#6B7280"),
    ("gray-600", "#4B5563"),
    ("gray-700", "#374151"),
    ("gray-800", "#1F2937"),
    ("gray-900", "#111827"),
    ("red-50", "#FEF2F2"),
    ("red-100", "#FEE2E2"),
    ("red-200", "#FECACA"),
    ("red-300", "#FCA5A5"),
    ("red-400", "#F87171"),
    ("red-500", "#EF4444"),
    ("red-600", "#DC2626"),
    ("red-700", "#B91C1C"),
    ("red-800", "#991B1B"),
    ("red-900", "#7F1D1D"),
    ("yellow-50", "#FEFCE8"),
    ("yellow-100", "#FEF9C3"),
    ("yellow-200", "#FEF08A"),
    ("yellow-300", "#FDE047"),
    ("yellow-400", "#FACC15"),
    ("yellow-500", "#EAB308"),
    ("yellow-600", "#CA8A04"),
    ("yellow-700", "#A16207"),
    ("yellow-800", "#854D0E"),
    ("yellow-900", "#713F12"),
    ("green-50", "#F0FDF4"),
    ("green-100", "#DCFCE7"),
    ("green-200", "#BBF7D0"),
    ("green-300", "#86EFAC"),
    ("green-400", "#4ADE80"),
    ("green-500", "#22C55E"),
    ("green-600", "#16A34A"),
    ("green-700", "#15803D"),
    ("green-800", "#166534"),
    ("green-900", "#14532D"),
    ("blue-50", "#EFF6FF"),
    ("blue-100", "#DBEAFE"),
    ("blue-200", "#BFDBFE"),
    ("blue-300", "#93C5FD"),
    ("blue-400", "#60A5FA"),
    ("blue-500", "#3B82F6"),
    ("blue-600", "#2563EB"),
    ("blue-700", "#1D4ED8"),
    ("blue-800", "#1E40AF"),
    ("blue-900", "#1E3A8A"),
    // Mid shades of the remaining hues
    ("slate-500", "#64748B"),
    ("zinc-500", "#71717A"),
    ("neutral-500", "#737373"),
    ("stone-500", "#78716C"),
    ("orange-500", "#F97316"),
    ("amber-500", "#F59E0B"),
    ("lime-500", "#84CC16"),
    ("emerald-500", "#10B981"),
    ("teal-500", "#14B8A6"),
    ("cyan-500", "#06B6D4"),
    ("sky-500", "#0EA5E9"),
    ("indigo-500", "#6366F1"),
    ("violet-500", "#8B5CF6"),
    ("purple-500", "#A855F7"),
    ("fuchsia-500", "#D946EF"),
    ("pink-500", "#EC4899"),
    ("rose-500", "#F43F5E"),
];
