/*! Test coverage for the core IR.
 *
 * The builder and type conversion sit under every lowering rule, so these
 * tests pin down handle validation, conversion failures, and the textual and
 * serialized forms.
 */
